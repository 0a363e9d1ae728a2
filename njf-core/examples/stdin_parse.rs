use std::io::Read;

use njf_core::Body;

fn main() {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input).unwrap();

    let body = Body::new(&input);
    let mut objects = body.objects();
    for object in objects.by_ref() {
        eprintln!("OBJECT: {:?} flags={:?}", object, object.flags().collect::<Vec<_>>());
    }
    if let Some(err) = objects.error() {
        eprintln!("STOPPED: {err}");
    }
}

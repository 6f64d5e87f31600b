use di_abstractions::Injectable;
use di_macros::Injectable;
use std::sync::Arc;

#[derive(Injectable)]
struct Holder<T: Send + Sync + 'static> {
    #[inject]
    inner: Arc<T>,
}

#[derive(Injectable)]
struct Marker;

fn main() {
    let holder = Holder {
        inner: Arc::new(5_u8),
    };
    assert_eq!(holder.injection_points()[0].field, "inner");
    assert!(Marker.injection_points().is_empty());
}

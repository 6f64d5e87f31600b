use di_abstractions::{interface, Applicator, Injectable, TypeMapper};
use di_impl::Container;
use di_macros::Injectable;
use std::sync::Arc;

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

interface!(Greeter = [English]);

#[derive(Injectable)]
struct Service {
    #[inject]
    greeter: Arc<dyn Greeter>,
    #[inject(optional)]
    prefix: Option<Arc<String>>,
    calls: u32,
}

fn main() {
    let mut container = Container::new();
    container.map(English);

    let mut service = Service {
        greeter: Arc::new(English),
        prefix: None,
        calls: 0,
    };
    container.apply(&mut service).unwrap();

    assert_eq!(service.injection_points().len(), 2);
    assert_eq!(service.greeter.greet(), "hello");
    assert!(service.prefix.is_none());
    assert_eq!(service.calls, 0);
}

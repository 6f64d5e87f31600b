//! 容器与派生宏的端到端测试

use di_abstractions::{
    interface, Applicator, ContainerConfig, DependencyError, Injectable, Injector, Invoker,
    TypeKey, TypeMapper,
};
use di_impl::Container;
use di_macros::Injectable;
use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;

#[derive(Debug)]
struct Address {
    province: String,
    city: String,
}

#[derive(Debug)]
struct AuthCode {
    code: String,
}

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

struct FixedClock(u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

interface!(Clock = [FixedClock]);

#[derive(Injectable)]
struct User {
    name: String,
    age: u32,
    #[inject]
    address: Arc<Address>,
    #[inject]
    auth_code: Arc<AuthCode>,
    #[inject]
    clock: Option<Arc<dyn Clock>>,
}

impl User {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            age: 30,
            address: Arc::new(Address {
                province: String::new(),
                city: String::new(),
            }),
            auth_code: Arc::new(AuthCode {
                code: String::new(),
            }),
            clock: None,
        }
    }
}

#[derive(Injectable)]
struct Registry {
    #[inject]
    clock: Arc<dyn Clock>,
    #[inject(optional)]
    user: Option<Arc<RwLock<User>>>,
}

#[derive(Injectable)]
struct Plain {
    count: u32,
}

fn application_scope() -> Container {
    let mut container = Container::new();
    container
        .map(Address {
            province: "广东".to_string(),
            city: "深圳".to_string(),
        })
        .map(AuthCode {
            code: "123456".to_string(),
        });
    container
}

#[test]
fn test_struct_injection_leaves_unmarked_fields() -> anyhow::Result<()> {
    let container = application_scope();
    let mut user = User::new("lorn");

    container.apply(&mut user)?;

    assert_eq!(user.name, "lorn");
    assert_eq!(user.age, 30);
    assert_eq!(user.address.province, "广东");
    assert_eq!(user.address.city, "深圳");
    assert_eq!(user.auth_code.code, "123456");
    assert!(user.clock.is_none());
    Ok(())
}

#[test]
fn test_injection_points_follow_declaration_order() {
    let user = User::new("lorn");
    let points = user.injection_points();

    let fields: Vec<&str> = points.iter().map(|point| point.field).collect();
    assert_eq!(fields, vec!["address", "auth_code", "clock"]);
    assert_eq!(points[0].key, TypeKey::of::<Address>());
    assert_eq!(points[2].key, TypeKey::of::<dyn Clock>());
    assert!(!points[0].optional);
    assert!(points[2].optional);
}

#[test]
fn test_optional_interface_field_uses_fallback() -> anyhow::Result<()> {
    let mut container = application_scope();
    container.map(FixedClock(1_700_000_000));
    let mut user = User::new("lorn");

    container.apply(&mut user)?;

    assert_eq!(user.clock.as_ref().map(|clock| clock.now()), Some(1_700_000_000));
    Ok(())
}

#[test]
fn test_missing_required_field_reports_type() {
    let mut container = Container::new();
    container.map(Address {
        province: "广东".to_string(),
        city: "深圳".to_string(),
    });
    let mut user = User::new("lorn");

    let err = container.apply(&mut user).unwrap_err();

    assert!(matches!(err, DependencyError::ValueNotFound { .. }));
    assert!(err.to_string().contains("AuthCode"));
    assert_eq!(user.address.city, "深圳");
    assert!(user.auth_code.code.is_empty());
}

#[test]
fn test_struct_without_markers_is_noop() -> anyhow::Result<()> {
    let container = Container::new();
    let mut plain = Plain { count: 3 };

    container.apply(&mut plain)?;

    assert_eq!(plain.count, 3);
    assert!(plain.injection_points().is_empty());
    Ok(())
}

#[test]
fn test_request_scope_over_application_scope() -> anyhow::Result<()> {
    let application = Arc::new(application_scope());

    let mut request = Container::new();
    request.map(AuthCode {
        code: "request".to_string(),
    });
    request.set_parent(application.clone());

    let mut user = User::new("lorn");
    request.apply(&mut user)?;

    assert_eq!(user.auth_code.code, "request");
    assert_eq!(user.address.city, "深圳");
    assert_eq!(application.get::<AuthCode>().map(|c| c.code.clone()), Some("123456".to_string()));
    Ok(())
}

#[test]
fn test_apply_all_wires_registered_structs() -> anyhow::Result<()> {
    let mut container = application_scope();
    container
        .map(FixedClock(42))
        .map_injectable(User::new("lorn"))
        .map_injectable(Registry {
            clock: Arc::new(FixedClock(0)),
            user: None,
        });

    container.apply_all()?;

    let user = container.get::<RwLock<User>>().unwrap();
    assert_eq!(user.read().auth_code.code, "123456");

    let registry = container.get::<RwLock<Registry>>().unwrap();
    assert_eq!(registry.read().clock.now(), 42);
    assert!(Arc::ptr_eq(registry.read().user.as_ref().unwrap(), &user));
    Ok(())
}

#[test]
fn test_invoke_with_interface_parameter() -> anyhow::Result<()> {
    let mut container = application_scope();
    container.map(FixedClock(7));

    let summary = container.invoke(|address: Arc<Address>, clock: Arc<dyn Clock>| {
        format!("{}@{}", address.city, clock.now())
    })?;

    assert_eq!(summary, "深圳@7");
    Ok(())
}

#[test]
fn test_invoke_with_injectable_result() -> anyhow::Result<()> {
    let container = application_scope();

    let user = container.invoke(|address: Arc<Address>, auth_code: Arc<AuthCode>| User {
        name: "invoked".to_string(),
        age: 1,
        address,
        auth_code,
        clock: None,
    })?;

    assert_eq!(user.name, "invoked");
    assert_eq!(user.address.city, "深圳");
    Ok(())
}

#[test]
fn test_container_config_from_file() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "interface_fallback = false")?;
    writeln!(file, "trace_resolution = true")?;

    let config: ContainerConfig =
        infrastructure_common::load_config(Some(file.path()), "LORN_DI_INTEGRATION")?;
    assert!(!config.interface_fallback);
    assert!(config.parent_delegation);
    assert!(config.trace_resolution);

    let mut container = Container::with_config(config);
    container.map(FixedClock(1));
    assert!(container.get::<dyn Clock>().is_none());
    Ok(())
}

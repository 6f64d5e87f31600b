//! # 依赖注入演示程序
//!
//! 演示一个应用级容器和一个请求级容器：
//! - 结构体字段注入（`#[derive(Injectable)]`）
//! - 函数参数注入
//! - 接口回退解析与父容器委托
//! - `apply_all` 批量注入已注册的结构体

use anyhow::Context;
use clap::Parser;
use di_abstractions::{
    interface, Applicator, ContainerConfig, Injector, Invoker, TypeMapper,
};
use di_impl::Container;
use di_macros::Injectable;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "di-demo")]
#[command(about = "Lorn DI 示例应用")]
struct Args {
    /// 容器配置文件路径（TOML）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 以 JSON 格式输出日志
    #[arg(long)]
    json_logs: bool,
}

// ========== 示例服务 ==========

/// 地址
#[derive(Debug)]
struct Address {
    province: String,
    city: String,
}

/// 授权码
#[derive(Debug)]
struct AuthCode {
    code: String,
}

/// 问候接口
trait Greeter: Send + Sync {
    fn greet(&self, name: &str) -> String;
}

/// 中文问候
struct ChineseGreeter;

impl Greeter for ChineseGreeter {
    fn greet(&self, name: &str) -> String {
        format!("你好, {name}")
    }
}

/// 英文问候
struct EnglishGreeter;

impl Greeter for EnglishGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Hello, {name}")
    }
}

interface!(Greeter = [ChineseGreeter, EnglishGreeter]);

/// 用户
#[derive(Injectable)]
struct User {
    name: String,
    age: u32,
    #[inject]
    address: Option<Arc<Address>>,
    #[inject]
    auth_code: Option<Arc<AuthCode>>,
}

/// 欢迎服务，注册后由 `apply_all` 注入
#[derive(Injectable)]
struct WelcomeService {
    #[inject]
    greeter: Option<Arc<dyn Greeter>>,
    #[inject]
    address: Option<Arc<Address>>,
}

impl WelcomeService {
    fn welcome(&self, name: &str) -> String {
        match (&self.greeter, &self.address) {
            (Some(greeter), Some(address)) => {
                format!("{} ({}{})", greeter.greet(name), address.province, address.city)
            }
            _ => format!("{name} (未注入)"),
        }
    }
}

// ========== 演示函数 ==========

/// 构建应用级容器
fn build_application_scope(config: ContainerConfig) -> Container {
    let mut container = Container::with_config(config);
    container
        .map(Address {
            province: "广东".to_string(),
            city: "深圳".to_string(),
        })
        .map(ChineseGreeter)
        .map(AuthCode {
            code: "app-000000".to_string(),
        });
    container
}

/// 演示结构体字段注入
fn demo_struct_injection(request: &Container) -> anyhow::Result<()> {
    info!("=== 结构体字段注入演示 ===");

    let mut user = User {
        name: "lorn".to_string(),
        age: 30,
        address: None,
        auth_code: None,
    };
    request.apply(&mut user)?;

    info!(
        "注入后的用户: {} ({} 岁), 地址 {:?}, 授权码 {:?}",
        user.name,
        user.age,
        user.address.as_ref().map(|a| format!("{}{}", a.province, a.city)),
        user.auth_code.as_ref().map(|c| c.code.as_str())
    );
    Ok(())
}

/// 演示函数参数注入
fn demo_invoke(request: &Container) -> anyhow::Result<()> {
    info!("=== 函数参数注入演示 ===");

    let line = request.invoke(|greeter: Arc<dyn Greeter>, code: Arc<AuthCode>| {
        format!("{} / 授权码 {}", greeter.greet("请求"), code.code)
    })?;
    info!("{}", line);

    match request.invoke(|_: Arc<String>| ()) {
        Ok(()) => warn!("未注册的参数竟然被解析了"),
        Err(e) => info!("预期的解析失败: {}", e),
    }
    Ok(())
}

/// 演示 apply_all
fn demo_apply_all(request: &mut Container) -> anyhow::Result<()> {
    info!("=== 批量注入演示 ===");

    // 显式接口绑定优先于接口回退解析
    request.map_to::<dyn Greeter>(Arc::new(EnglishGreeter));
    request.map_injectable(WelcomeService {
        greeter: None,
        address: None,
    });
    request.apply_all()?;

    let service = request
        .get::<RwLock<WelcomeService>>()
        .context("WelcomeService 未注册")?;
    info!("{}", service.read().welcome("lorn"));
    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        eprintln!("无效的日志级别 `{level}`，使用 info");
        LevelFilter::INFO
    })
}

/// 初始化日志系统
fn initialize_logging(args: &Args) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(parse_log_level(&args.log_level).into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if args.json_logs {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    }
    .map_err(|e| anyhow::anyhow!("日志初始化失败: {e}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(&args)?;

    info!("启动 Lorn DI 示例应用");

    let config: ContainerConfig =
        infrastructure_common::load_config(args.config.as_deref(), "DI")
            .context("加载容器配置失败")?;
    info!("容器配置: {:?}", config);

    let application = Arc::new(build_application_scope(config.clone()));

    let mut request = Container::with_config(config);
    request.map(AuthCode {
        code: "req-123456".to_string(),
    });
    request.set_parent(application.clone());

    demo_struct_injection(&request)?;
    demo_invoke(&request)?;
    demo_apply_all(&mut request)?;

    info!(
        "应用级容器 {} 项注册，请求级容器 {} 项注册",
        application.len(),
        request.len()
    );
    Ok(())
}

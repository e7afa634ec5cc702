use std::sync::Arc;

use tiny_injector::{
    component, global, Arguments, DiBuilder, Discovered, DynError, InstanceFactory, TypeInfo,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DynError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let components = DiBuilder::new()
        .add_instance(Settings {
            greeting: "Hello".to_string(),
        })
        .add_source(Discovered::under(module_path!()));

    global::scan(components)?;

    println!("{:?}", global::container()?);
    let greeter = global::retrieve::<Greeter>()?;
    println!("{}", greeter.greet("world"));

    Ok(())
}

#[derive(Debug)]
struct Settings {
    greeting: String,
}

#[derive(Debug)]
struct Greeter {
    settings: Arc<Settings>,
    clock: Arc<Clock>,
}
impl Greeter {
    fn greet(&self, name: &str) -> String {
        format!(
            "{}, {name}! (tick {})",
            self.settings.greeting, self.clock.tick
        )
    }
}

#[derive(Debug)]
struct Clock {
    tick: u64,
}

struct GreeterFactory;
impl InstanceFactory for GreeterFactory {
    type Provides = Greeter;

    fn parameters() -> Vec<TypeInfo> {
        vec![TypeInfo::of::<Settings>(), TypeInfo::of::<Clock>()]
    }

    fn construct(&self, args: &mut Arguments) -> Result<Greeter, DynError> {
        Ok(Greeter {
            settings: args.resolve()?,
            clock: args.resolve()?,
        })
    }
}

component!(GreeterFactory);
component!(tiny_injector::FnFactory::new(
    vec![],
    |_: &mut Arguments| Ok(Clock { tick: 1 })
));

//! End to end scans through the injector

use std::{sync::Arc, thread};

use rstest::{fixture, rstest};
use tiny_injector::{
    Arguments, DiBuilder, DynError, Injector, InstanceFactory, RetrieveError, ScanError, TypeInfo,
};

#[derive(Debug)]
struct Foo;

#[derive(Debug)]
struct Bar {
    foo: Arc<Foo>,
}

struct BarFactory;
impl InstanceFactory for BarFactory {
    type Provides = Bar;

    fn parameters() -> Vec<TypeInfo> {
        vec![TypeInfo::of::<Foo>()]
    }

    fn construct(&self, args: &mut Arguments) -> Result<Bar, DynError> {
        Ok(Bar {
            foo: args.resolve()?,
        })
    }
}

fn foo_and_bar() -> DiBuilder {
    DiBuilder::new()
        .add_fn(vec![], |_: &mut Arguments| Ok(Foo))
        .add_factory(BarFactory)
}

#[fixture]
fn injector() -> Injector {
    let mut injector = Injector::new();
    injector.scan(foo_and_bar()).unwrap();
    injector
}

#[rstest]
fn dependency_is_built_first_and_shared(injector: Injector) {
    // Arrange
    let container = injector.container().unwrap();

    // Act
    let bar = injector.retrieve::<Bar>().unwrap();
    let foo = injector.retrieve::<Foo>().unwrap();

    // Assert
    assert_eq!(
        container.construction_order(),
        &[TypeInfo::of::<Foo>(), TypeInfo::of::<Bar>()]
    );
    assert!(Arc::ptr_eq(&bar.foo, &foo));
}

#[rstest]
fn mutual_dependency_is_cyclic() {
    // Arrange
    struct A;
    struct B;
    let components = DiBuilder::new()
        .add_fn(vec![TypeInfo::of::<B>()], |_: &mut Arguments| Ok(A))
        .add_fn(vec![TypeInfo::of::<A>()], |_: &mut Arguments| Ok(B));
    let mut injector = Injector::new();

    // Act
    let result = injector.scan(components);

    // Assert
    assert!(matches!(result, Err(ScanError::CyclicDependency { .. })));
    assert_eq!(
        injector.retrieve::<A>().err(),
        Some(RetrieveError::NotScanned)
    );
}

#[rstest]
fn undiscovered_parameter_is_missing() {
    // Arrange
    let mut injector = Injector::new();

    // Act
    let result = injector.scan(DiBuilder::new().add_factory(BarFactory));

    // Assert
    let Err(ScanError::MissingDependency {
        dependency,
        required_by,
    }) = &result
    else {
        panic!("expected a missing dependency, got {result:?}");
    };
    assert_eq!(*dependency, TypeInfo::of::<Foo>());
    assert_eq!(*required_by, TypeInfo::of::<Bar>());
    assert!(result.unwrap_err().to_string().contains("Foo"));
}

#[rstest]
fn independent_components_are_all_built() {
    // Arrange
    struct One;
    struct Two;
    struct Three;
    let mut injector = Injector::new();

    // Act
    injector
        .scan(
            DiBuilder::new()
                .add_fn(vec![], |_: &mut Arguments| Ok(One))
                .add_fn(vec![], |_: &mut Arguments| Ok(Two))
                .add_fn(vec![], |_: &mut Arguments| Ok(Three)),
        )
        .unwrap();

    // Assert
    assert_eq!(injector.container().unwrap().len(), 3);
    assert!(injector.retrieve::<One>().is_ok());
    assert!(injector.retrieve::<Two>().is_ok());
    assert!(injector.retrieve::<Three>().is_ok());
}

#[rstest]
fn arguments_follow_declaration_order() {
    // Arrange
    struct Left(&'static str);
    struct Right(&'static str);
    struct Pair(String);
    let components = DiBuilder::new()
        .add_fn(
            vec![TypeInfo::of::<Right>(), TypeInfo::of::<Left>()],
            |args: &mut Arguments| {
                let right: Arc<Right> = args.resolve()?;
                let left: Arc<Left> = args.resolve()?;
                Ok(Pair(format!("{}{}", right.0, left.0)))
            },
        )
        .add_instance(Left("l"))
        .add_instance(Right("r"));
    let mut injector = Injector::new();

    // Act
    injector.scan(components).unwrap();

    // Assert
    assert_eq!(injector.retrieve::<Pair>().unwrap().0, "rl");
}

#[rstest]
fn retrieval_is_idempotent(injector: Injector) {
    let first = injector.retrieve::<Bar>().unwrap();

    for _ in 0..10 {
        assert!(Arc::ptr_eq(&first, &injector.retrieve::<Bar>().unwrap()));
    }
}

#[rstest]
fn container_is_shared_across_threads(injector: Injector) {
    // Arrange
    let container = injector.container().unwrap().clone();
    let expected = container.retrieve::<Foo>().unwrap();

    // Act
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let container = container.clone();
            thread::spawn(move || container.retrieve::<Foo>().unwrap())
        })
        .collect();

    // Assert
    for handle in handles {
        assert!(Arc::ptr_eq(&handle.join().unwrap(), &expected));
    }
}

#[rstest]
fn second_scan_fails_even_after_success(mut injector: Injector) {
    let result = injector.scan(foo_and_bar());

    assert!(matches!(result, Err(ScanError::AlreadyScanned)));
}

#[rstest]
fn unregistered_type_is_unknown(injector: Injector) {
    let result = injector.retrieve::<String>();

    assert_eq!(
        result.unwrap_err(),
        RetrieveError::UnknownComponent(std::any::type_name::<String>())
    );
}

//! trybuild compile-time tests for di_macros

#[test]
fn trybuild_injectable_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/ok_injectable.rs");
    t.pass("tests/trybuild/ok_generic_injectable.rs");
}

#[test]
fn tessera_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/error_pass.rs");
    t.pass("tests/ui/error_context.rs");
    t.pass("tests/ui/api_model_pass.rs");
}

fn main() {
    // Compile the Slint UI at build-time.
    let config = slint_build::CompilerConfiguration::new().with_style("native".to_string());

    slint_build::compile_with_config("ui/app.slint", config).unwrap();
}

//! Build-script helper that compiles a schema into `OUT_DIR`.
//!
//! Call from a `build.rs` whose `main` returns a boxed error, then pull the
//! output in with `include!(concat!(env!("OUT_DIR"), "/tablecraft.rs"))`.
#[macro_export]
macro_rules! build {
    () => {
        $crate::build!("tablecraft.toml")
    };
    ($config:expr) => {
        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", $config);

        let out_dir = ::std::env::var("OUT_DIR").expect("OUT_DIR not set");

        //
        // DATABASE CODE
        //

        let output = ::tablecraft::build::run($config, out_dir)?;
        println!("cargo:rerun-if-changed={}", output.schema_file.display());
    };
}

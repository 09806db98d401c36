fn main() {
    println!("cargo:rerun-if-changed=layout.c");
    println!("cargo:rerun-if-changed=header_check.c");
    println!("cargo:rerun-if-changed=regex_slim.h");

    // header_check.c has no code; it fails to compile if a declaration in
    // regex_slim.h changes type. tests/c_header.rs pins the Rust side.
    cc::Build::new()
        .include(".")
        .file("layout.c")
        .file("header_check.c")
        .warnings_into_errors(true)
        .compile("regex_slim_layout");
}

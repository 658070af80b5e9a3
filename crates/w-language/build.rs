use std::path::PathBuf;

fn main() {
    println!("cargo::rustc-check-cfg=cfg(w_grammar)");

    let dir: PathBuf = ["grammar", "src"].iter().collect();
    let parser_file = dir.join("parser.c");
    let scanner_file = dir.join("scanner.c");

    println!("cargo:rerun-if-changed={}", parser_file.display());
    println!("cargo:rerun-if-changed={}", scanner_file.display());

    // The parser is generated from grammar/grammar.js by the tree-sitter CLI
    if !parser_file.exists() {
        println!(
            "cargo:warning=w grammar not generated ({} missing); run `tree-sitter generate` in crates/w-language/grammar to link tree_sitter_w",
            parser_file.display()
        );
        return;
    }

    let mut build = cc::Build::new();
    build
        .include(&dir)
        .flag_if_supported("-std=c11")
        .flag_if_supported("-Wno-unused-parameter")
        .file(&parser_file);
    if scanner_file.exists() {
        build.file(&scanner_file);
    }
    build.compile("tree-sitter-w");

    println!("cargo:rustc-cfg=w_grammar");
}

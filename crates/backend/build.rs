use std::env;
use std::fs;
use std::path::Path;

/// Place config.toml and the descriptor files next to the built artifacts,
/// where `load_config` and `resolve_path` look for them.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=catalog");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap(); // "debug" or "release"

    // OUT_DIR is target/<profile>/build/layout-backend-xxx/out
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        fs::copy(&source_config, target_dir.join("config.toml"))
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    let catalog_dir = target_dir.join("catalog");
    fs::create_dir_all(&catalog_dir)
        .unwrap_or_else(|e| panic!("Failed to create {:?}: {}", catalog_dir, e));
    for entry in fs::read_dir(manifest_dir.join("catalog")).expect("Could not read catalog") {
        let path = entry.expect("Could not read catalog entry").path();
        if path.extension().map_or(false, |ext| ext == "json") {
            if let Some(name) = path.file_name() {
                fs::copy(&path, catalog_dir.join(name))
                    .unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", path, e));
            }
        }
    }
}

use md_compose::{process_includes_sync_with, MemoryStorage};

fn main() {
    let storage = MemoryStorage::new()
        .with(
            "guide/index.md",
            "# User Guide\n\n[[[install.md]]]\n\n[[[usage.md]]]\n",
        )
        .with("guide/install.md", "## Install\n\nRun `cargo install md-compose`.\n")
        .with("guide/usage.md", "## Usage\n\n`md-compose guide/index.md`\n");

    match process_includes_sync_with(&storage, "guide/index.md") {
        Ok(composed) => {
            println!("Composed document:\n{composed}");
        }
        Err(e) => {
            eprintln!("Failed to compose: {:?}", miette::Report::new(e));
        }
    }
}

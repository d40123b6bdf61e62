// keinonto-info: Show the stored record and resolved stems of words.
//
// Usage:
//   keinonto-info [-d DB] LEMMA...
//
// Options:
//   -d, --db PATH   Word database file
//   -h, --help      Print help

use std::io::{self, Write};

fn main() {
    keinonto_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (db_path, args) = keinonto_cli::parse_db_path(&args);

    if keinonto_cli::wants_help(&args) {
        println!("keinonto-info: Show what is stored for Finnish nouns.");
        println!();
        println!("Usage: keinonto-info [-d DB] LEMMA...");
        println!();
        println!("Options:");
        println!("  -d, --db PATH   Word database file");
        println!("  -h, --help      Print this help");
        return;
    }

    if args.is_empty() {
        keinonto_cli::fatal("expected at least one LEMMA (see --help)");
    }

    let db = keinonto_cli::resolve_db_path(db_path.as_deref()).unwrap_or_else(|e| keinonto_cli::fatal(&e));
    let generator = keinonto_cli::load_generator(&db).unwrap_or_else(|e| keinonto_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    for lemma in &args {
        let info = match generator.info(lemma) {
            Ok(info) => info,
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
                continue;
            }
        };
        let entry = &info.entry;
        let _ = writeln!(out, "Word: {}", entry.lemma);
        let _ = writeln!(out, "Declension class: {}", entry.class);
        if !entry.gradation.is_none() {
            let _ = writeln!(out, "Gradation: {}", entry.gradation);
        }
        let _ = writeln!(out, "Stems:");
        for (kind, stem) in info.stems.iter() {
            let marker = if entry.stems.get(kind).is_some() { " (override)" } else { "" };
            let _ = writeln!(out, "  {}: {stem}{marker}", kind.name());
        }
        if !entry.forms.is_empty() {
            let _ = writeln!(out, "Form overrides:");
            for (key, form) in &entry.forms {
                let _ = writeln!(out, "  {key}: {form}");
            }
        }
        if let Some(size) = generator.store().record_size(lemma) {
            let _ = writeln!(out, "Record size: {size} bytes");
        }
        let _ = writeln!(out);
    }

    let _ = out.flush();
    if failed {
        std::process::exit(1);
    }
}

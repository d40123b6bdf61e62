// keinonto-stem: Override one stem of a stored word.
//
// Usage:
//   keinonto-stem [-d DB] LEMMA KIND STEM
//
// KIND is one of strong, weak (or genitive), partitive, plural, illative.
//
// Options:
//   -d, --db PATH   Word database file
//   -h, --help      Print help

use keinonto_fi::StemKind;

fn main() {
    keinonto_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (db_path, args) = keinonto_cli::parse_db_path(&args);

    if keinonto_cli::wants_help(&args) {
        println!("keinonto-stem: Override one stem of a stored word.");
        println!();
        println!("Usage: keinonto-stem [-d DB] LEMMA KIND STEM");
        println!();
        println!("KIND is one of: strong, weak (or genitive), partitive, plural, illative.");
        println!();
        println!("Options:");
        println!("  -d, --db PATH   Word database file");
        println!("  -h, --help      Print this help");
        return;
    }

    let [lemma, kind, stem] = args.as_slice() else {
        keinonto_cli::fatal("expected LEMMA KIND STEM (see --help)");
    };
    let kind: StemKind = kind
        .parse()
        .unwrap_or_else(|e: keinonto_fi::stems::UnknownStemKind| keinonto_cli::fatal(&e.to_string()));

    let db = keinonto_cli::resolve_db_path(db_path.as_deref()).unwrap_or_else(|e| keinonto_cli::fatal(&e));
    let generator = keinonto_cli::load_generator(&db).unwrap_or_else(|e| keinonto_cli::fatal(&e));

    generator
        .add_stem(lemma, kind, stem)
        .unwrap_or_else(|e| keinonto_cli::fatal(&e.to_string()));
    keinonto_cli::save_generator(&generator, &db).unwrap_or_else(|e| keinonto_cli::fatal(&e));

    println!("Added {} stem for '{lemma}'", kind.name());
}

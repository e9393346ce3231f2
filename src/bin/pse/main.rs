//! pse CLI - Tool for inspecting PyMOL session files.

use pse::pickle::{DecodedValue, PickleReader};
use pse::prelude::*;
use pse::scene::GroupNode;
use std::collections::BTreeMap;
use std::env;
use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Default filter directive for a verbosity flag
fn level_for(flag: &str) -> Option<&'static str> {
    match flag {
        "-v" | "--verbose" => Some("debug"),
        "-vv" | "--trace" => Some("trace"),
        "-q" | "--quiet" => Some("error"),
        _ => None,
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut level = "info";
    let mut opts = LoadOptions::new().with_state(StateSelector::Current);
    let mut filtered_args: Vec<&str> = Vec::new();
    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        if let Some(l) = level_for(arg) {
            level = l;
            continue;
        }
        match arg.as_str() {
            "--all-states" => opts.state = StateSelector::All,
            "--no-surface" => opts.allow_surface = false,
            "--state" => match iter.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(n) if n > 0 => opts.state = StateSelector::Index(n),
                _ => {
                    eprintln!("Error: --state expects a positive number");
                    std::process::exit(1);
                }
            },
            _ => filtered_args.push(arg),
        }
    }

    if filtered_args.is_empty() {
        print_help();
        return;
    }

    let json_mode = filtered_args.iter().any(|&s| s == "--json" || s == "-j");
    init_tracing(if json_mode { "error" } else { level });
    filtered_args.retain(|&s| s != "--json" && s != "-j");

    match filtered_args[0] {
        // Info command - show session summary
        "info" | "i" => cmd_info(require(&filtered_args, 1, "info <file.pse>"), &opts),

        // Tree command - show group hierarchy
        "tree" | "t" => cmd_tree(require(&filtered_args, 1, "tree <file.pse>"), &opts),

        // Objects command - scene object queue
        "objects" | "o" => cmd_objects(require(&filtered_args, 1, "objects <file.pse>"), &opts),

        // Dump command - decoded top-level keys
        "dump" | "d" => cmd_dump(require(&filtered_args, 1, "dump <file.pse> [--json]"), json_mode),

        // Trim command - write the derived file
        "trim" => {
            let input = require(&filtered_args, 1, "trim <in.pse> <out.pse>");
            let output = require(&filtered_args, 2, "trim <in.pse> <out.pse>");
            cmd_trim(input, output, opts);
        }

        // Help
        "help" | "h" | "-h" | "--help" => print_help(),

        // Default: if file exists, show info; otherwise error
        _ => {
            if Path::new(filtered_args[0]).exists() {
                cmd_info(filtered_args[0], &opts);
            } else {
                eprintln!("Unknown command: {}", filtered_args[0]);
                eprintln!();
                print_help();
                std::process::exit(1);
            }
        }
    }
}

fn require<'a>(args: &[&'a str], i: usize, usage: &str) -> &'a str {
    match args.get(i) {
        Some(a) => a,
        None => {
            eprintln!("Error: missing argument");
            eprintln!("Usage: pse {}", usage);
            std::process::exit(1);
        }
    }
}

fn print_help() {
    let date = option_env!("PSE_BUILD_DATE").unwrap_or("unknown");
    println!("pse {} ({}) - PyMOL session inspector", env!("CARGO_PKG_VERSION"), date);
    println!();
    println!("USAGE:");
    println!("    pse [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    i, info    <file>             Show version, counts and load notes");
    println!("    t, tree    <file>             Show group hierarchy with visibility");
    println!("    o, objects <file>             List the scene object queue");
    println!("    d, dump    <file> [--json]    Show decoded top-level keys");
    println!("    trim       <in> <out>         Write a copy without map and CGO data");
    println!("    h, help                       Show this help");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Show debug output");
    println!("    -vv, --trace     Show trace output (very verbose)");
    println!("    -q, --quiet      Suppress all output");
    println!("    --state N        Load only state N (movie frame N for simple movies)");
    println!("    --all-states     Load every state");
    println!("    --no-surface     Skip surfaces, meshes and map meshes");
    println!();
    println!("NOTES:");
    println!("    - Passing a .pse file directly is equivalent to 'info'");
    println!("    - RUST_LOG overrides the verbosity flags");
}

// ============================================================================
// Loading
// ============================================================================

fn map_file(path: &str) -> Mmap {
    let mapped = File::open(path).and_then(|file| {
        // SAFETY: the map is read-only and lives only for this command.
        unsafe { Mmap::map(&file) }
    });
    match mapped {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Failed to open {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

fn load(path: &str, opts: &LoadOptions) -> LoadedSession {
    tracing::info!("Opening session: {}", path);
    let bytes = map_file(path);
    match load_session(&bytes, opts) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_info(path: &str, opts: &LoadOptions) {
    let session = load(path, opts);

    println!("Session: {}", path);
    println!("Version: {}", session.version);
    println!("States:  {} ({} loaded)", session.state_count, session.model_count);
    println!("Frame:   {:?}", session.frame);
    if let Some((w, h)) = session.preferred_size {
        println!("Size:    {}x{}", w, h);
    }
    if let Some(movie) = &session.movie {
        println!("Movie:   {} frames, current {}", movie.frame_count, movie.current_frame + 1);
    }
    println!();

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for (_, kind) in session.named_objects() {
        *kinds.entry(kind.name()).or_default() += 1;
    }
    println!("Objects:");
    for (kind, n) in &kinds {
        println!("  {:<12} {}", kind, n);
    }
    println!("  atoms:       {}", session.atom_count);
    println!("  bonds:       {}", session.bond_count);
    println!("  scenes:      {}", session.scenes.len());
    println!("  queued:      {}", session.objects.len());

    if !session.notes.is_empty() {
        println!();
        println!("Notes:");
        for note in &session.notes {
            println!("  {}", note);
        }
    }
    if !session.failures.is_empty() {
        println!();
        println!("Failures:");
        for f in &session.failures {
            println!("  {}: {}", f.name, f.message);
        }
    }
    let stats = session.stats;
    tracing::debug!(
        "{} opcodes, memo {} stored / {} retrieved / {} missing",
        stats.opcodes,
        stats.memo_stored,
        stats.memo_retrieved,
        stats.memo_missing
    );
}

fn cmd_tree(path: &str, opts: &LoadOptions) {
    let session = load(path, opts);
    println!("Session: {}", path);
    println!();
    for root in session.groups.roots() {
        print_tree(&session, root, 0);
    }
}

fn print_tree(session: &LoadedSession, node: &GroupNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let shown = if session.visibility.is_hidden(&node.name) { "hidden" } else { "visible" };
    println!(
        "{}{} [{}] {} atoms, {}",
        indent,
        node.name,
        node.kind.name(),
        node.members().cardinality(),
        shown
    );
    for child in session.groups.children_of(&node.name) {
        if let Some(child) = session.groups.get(child) {
            print_tree(session, child, depth + 1);
        }
    }
}

fn cmd_objects(path: &str, opts: &LoadOptions) {
    let session = load(path, opts);
    println!("Session: {}", path);
    println!();
    for (i, obj) in session.objects.iter().enumerate() {
        let model = obj.model_index.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string());
        println!(
            "[{:>4}] {:<14} {:<24} model {:<3} {:>6} selected{}",
            i,
            obj.kind.name(),
            obj.object_id,
            model,
            obj.selection.len(),
            if obj.visible { "" } else { " (hidden)" }
        );
    }
}

fn cmd_dump(path: &str, json_mode: bool) {
    let bytes = map_file(path);
    let root = match PickleReader::new(&bytes[..]).decode() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Failed to decode {}: {}", path, e);
            std::process::exit(1);
        }
    };
    if json_mode {
        match serde_json::to_string_pretty(&root.to_json()) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to render JSON: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }
    let Some(map) = root.as_map() else {
        println!("{}", root.kind_name());
        return;
    };
    println!("Session: {}", path);
    for (key, value) in map.iter() {
        println!("  {:<20} {}", key, describe(value));
    }
}

fn describe(v: &DecodedValue) -> String {
    match v {
        DecodedValue::List(l) => format!("list[{}]", l.len()),
        DecodedValue::Map(m) => format!("map[{}]", m.len()),
        DecodedValue::Bytes(b) => format!("bytes[{}]", b.len()),
        DecodedValue::String(s) => format!("{:?}", s),
        other => format!("{}", other.to_json()),
    }
}

fn cmd_trim(input: &str, output: &str, opts: LoadOptions) {
    let bytes = map_file(input);
    let session = match load_session(&bytes, &opts.with_cache(true)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load {}: {}", input, e);
            std::process::exit(1);
        }
    };
    let Some(trimmed) = session.trimmed else {
        eprintln!("No trimmed copy produced for {}", input);
        std::process::exit(1);
    };
    if let Err(e) = std::fs::write(output, &trimmed) {
        eprintln!("Failed to write {}: {}", output, e);
        std::process::exit(1);
    }
    println!("Wrote {} ({} bytes, {} removed)", output, trimmed.len(), bytes.len() - trimmed.len());
}

use std::path::PathBuf;

use freebsd_ports_index::PortIndex;

fn main() {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let index = PortIndex::open(path.as_deref()).expect("failed to load INDEX");

    println!("=== All ports ({}) ===", index.len());
    for record in &index {
        println!("{}: {}", record.origin, record.package_name);
        println!("\tfdeps: {:?}", record.fetch_deps);
        println!("\tedeps: {:?}", record.extra_deps);
        println!("\tpdeps: {:?}", record.patch_deps);
        println!("\tbdeps: {:?}", record.build_deps);
        println!("\trdeps: {:?}", record.run_deps);
        println!("\twww:   {}", record.homepage);
    }

    println!("\n=== swills@FreeBSD.org ports ===");
    for record in index.search_by_maintainer("swills@FreeBSD.org") {
        println!("\t{}: {}", record.origin, record.package_name);
        if let Ok(origins) = index.build_deps_origins_of(&record.origin) {
            println!("\tbuild_depends: {:?}", origins);
        }
        if let Ok(origins) = index.run_deps_origins_of(&record.origin) {
            println!("\trun_depends:   {:?}", origins);
        }
    }

    println!("\n=== accerciser ===");
    match index.origin_of("accerciser-3.22.0") {
        Ok(origin) => println!("origin: {origin}"),
        Err(e) => println!("{e}"),
    }
    match index.build_deps_of("accessibility/accerciser") {
        Ok(deps) => println!("bdeps: {:?}", deps),
        Err(e) => println!("{e}"),
    }

    println!("\n=== py36-billiard ===");
    println!("{:?}", index.find_names_containing("py36-billiard"));
    println!("{:?}", index.find_origins_containing("py36-billiard"));

    println!("\n=== Python dependency lines ===");
    for name in ["billiard", "pytz", "kombu", "vine"] {
        match index.gen_dependency_directive(name) {
            Ok(line) => println!("{line}"),
            Err(e) => println!("# {name}: {e}"),
        }
    }
}

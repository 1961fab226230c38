/// Native entry point: prints the page content as a plain-text resume,
/// or as JSON with `--json`. The browser build uses the wasm-bindgen start
/// function instead.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use folio::default_profile;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let profile = default_profile();

    if std::env::args().any(|arg| arg == "--json") {
        match profile.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to serialize profile: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{}", profile.page_title());
    println!("{}", profile.tagline);

    println!("\nEXPERIENCE");
    for entry in &profile.experience {
        println!("  {} at {} ({})", entry.role, entry.company, entry.period);
        for highlight in &entry.highlights {
            println!("    - {highlight}");
        }
    }

    println!("\nSKILLS");
    for category in &profile.skill_categories {
        println!("  {}: {}", category.name, category.skills.join(", "));
    }

    println!("\nPROJECTS");
    for project in &profile.projects {
        println!("  {} [{}]", project.title, project.tags.join(", "));
        println!("    {}", project.description);
    }

    println!("\nEDUCATION");
    for entry in &profile.education {
        println!(
            "  {} - {} ({}, GPA {})",
            entry.degree, entry.school, entry.graduation, entry.gpa
        );
    }

    println!("\nCONTACT");
    for channel in &profile.contact {
        println!("  {}: {}", channel.label, channel.value);
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}

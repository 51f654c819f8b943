use anyhow::{anyhow, Result};

use animal_profile::{Animal, VERSION};

fn main() -> Result<()> {
    println!("🐾 Animal Profiles v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Build profiles
    let animals = vec![
        profile("Rex", 3, "dog")?,
        profile("Luna", 7, "cat")?,
        profile("Kiwi", 1, "parrot")?,
    ];
    println!("\n✓ Built {} profiles", animals.len());

    // 2. Introductions
    println!("\n📣 Introductions:");
    for animal in &animals {
        animal.announce();
    }

    // 3. JSON view
    println!("\n📋 Profiles as JSON:");
    for animal in &animals {
        println!("{}", serde_json::to_string(animal)?);
    }

    Ok(())
}

fn profile(name: &str, age: u32, category: &str) -> Result<Animal> {
    Animal::new(name, age, category).map_err(|errors| {
        let details: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        anyhow!("invalid profile: {}", details.join("; "))
    })
}

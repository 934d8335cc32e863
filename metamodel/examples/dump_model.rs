//! Demonstrates loading a sample aspect model and serializing it.
//!
//! Run with: `cargo run --example dump_model -p samm-metamodel`

fn main() {
    for model in samm_metamodel::models::all() {
        println!(
            "{} (urn:samm:{}:{})",
            model.aspect.name(),
            model.namespace.namespace,
            model.namespace.version
        );
        println!("  Properties:       {}", model.property_count());
        println!("  Entities:         {}", model.entity_count());
        println!("  Characteristics:  {}", model.characteristic_count());
        println!("  Units:            {}", model.units.len());
        println!("  Languages:        {}", model.language_tags().join(", "));
        println!();
    }

    // Serialize the Movement model to Turtle (show the first 400 chars).
    let model = samm_metamodel::models::movement::model();
    let turtle = samm_metamodel::serializer::turtle::to_turtle(model);
    println!("Turtle output ({} bytes):", turtle.len());
    let preview_end = turtle
        .char_indices()
        .nth(400)
        .map_or(turtle.len(), |(i, _)| i);
    println!("{}...", &turtle[..preview_end]);
}

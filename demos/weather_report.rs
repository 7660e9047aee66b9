use randsent::{Grammar, Sampler, format};
use std::error::Error;

/// Example of building a grammar in code instead of loading a rule file
fn main() -> Result<(), Box<dyn Error>> {
    let mut grammar = Grammar::new();

    grammar.add_rule("Report", "Region will see Sky with Wind", 1.0);
    grammar.add_rule("Report", "expect Sky over Region", 1.0);
    grammar.add_rule("Report", "Region stays dry", 0.5);

    grammar.add_rule("Region", "the coast", 1.0);
    grammar.add_rule("Region", "the highlands", 1.0);
    grammar.add_rule("Region", "the capital", 2.0);

    grammar.add_rule("Sky", "clear skies", 3.0);
    grammar.add_rule("Sky", "scattered showers", 2.0);
    grammar.add_rule("Sky", "heavy fog", 1.0);

    grammar.add_rule("Wind", "light winds", 2.0);
    grammar.add_rule("Wind", "strong gusts", 1.0);

    println!("Generated forecasts:");
    let mut sampler = Sampler::new(&grammar);
    for i in 1..=5 {
        let forecast = sampler.sample("Report", 50, false)?;
        println!("{}. {}", i, forecast);
    }

    println!("\nOne derivation tree:");
    let tree = sampler.sample("Report", 50, true)?;
    println!("{}", format::pretty(&tree));

    Ok(())
}

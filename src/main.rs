use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::path::Path;
use std::process;

use delivery_ga::ga::GaEngine;
use delivery_ga::io::{read_cities_file, read_orders_file, RunConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        println!("Usage: {} <config.json> <cities.csv> <orders.csv>", args[0]);
        process::exit(1)
    }

    if let Err(error) = run(&args[1], &args[2], &args[3]) {
        eprintln!("Error: {}", error);
        process::exit(1)
    }
}

fn run(config_path: &str, cities_path: &str, orders_path: &str) -> Result<(), Box<dyn Error>> {
    let config = RunConfig::from_path(Path::new(config_path))?;
    let cities = read_cities_file(
        Path::new(cities_path),
        config.map_size.width,
        config.map_size.height,
    )?;
    let orders = read_orders_file(Path::new(orders_path), &cities)?;

    let mut engine = GaEngine::new(&cities, orders, config.speed, config.ga_config())?;

    // Order id -> destination city id, for printing routes. The engine has
    // already checked that every city index is in range.
    let city_ids: HashMap<usize, usize> = engine
        .orders()
        .iter()
        .map(|order| (order.id(), cities[order.city()].id()))
        .collect();
    let origin = cities[0].id();

    while let Some(generation) = engine.next() {
        if generation.improved {
            println!(
                "({}) Update the shortest delay: {:.2} -> {:.2}",
                generation.index, generation.previous_delay, generation.best_delay
            );
            println!("\t{}", format_route(origin, &generation.best_route, &city_ids));
        }
    }

    println!("The shortest delay: {:.2}", engine.best_delay());
    println!(
        "\t{}",
        format_route(origin, &engine.best_order_ids(), &city_ids)
    );
    Ok(())
}

/// Renders a route as city identifiers: `0 -> 3 -> 1 -> 2`.
fn format_route(origin: usize, order_ids: &[usize], city_ids: &HashMap<usize, usize>) -> String {
    let mut text = origin.to_string();
    for id in order_ids {
        text.push_str(" -> ");
        text.push_str(&city_ids[id].to_string());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_route() {
        let city_ids: HashMap<usize, usize> = [(10, 3), (11, 1), (12, 7)].into_iter().collect();
        assert_eq!(format_route(0, &[11, 10, 12], &city_ids), "0 -> 1 -> 3 -> 7");
        assert_eq!(format_route(0, &[], &city_ids), "0");
    }
}

//! End-to-end exchanges driven through the public engine API.

use thermo_sim::core::commands::SimCommand;
use thermo_sim::core::definitions::WorldData;
use thermo_sim::core::enums::{SimPhase, SimulationSpeed};
use thermo_sim::core::events::SimEvent;
use thermo_sim::{SimConfig, SimulationEngine};

const WORLD: &str = r#"{
    "cities": [
        { "name": "Alphaville", "coord": { "lon": 20.0, "lat": 40.0 }, "countryCode": "AA", "population": 250000 },
        { "name": "Betagrad", "coord": { "lon": 30.0, "lat": 50.0 }, "countryCode": "BB", "population": 1000000 }
    ],
    "countries": [
        { "name": "Alphaland", "countryCode": "AA", "population": 250000, "labelPosition": { "lon": 20.0, "lat": 41.0 } },
        { "name": "Betaland", "countryCode": "BB", "population": 1000000, "labelPosition": { "lon": 30.0, "lat": 51.0 } }
    ],
    "launchSites": [
        { "country": "AA", "sites": [ { "name": "Alpha Silo", "coord": { "lon": 20.0, "lat": 40.0 }, "type": "facility" } ] },
        { "country": "BB", "sites": [ { "name": "Beta Sub", "coord": { "lon": 0.0, "lat": 60.0 }, "type": "submarine" } ] }
    ],
    "scenarios": [
        {
            "short": "Single strike",
            "description": "Alpha fires one warhead at Betagrad",
            "firstStrike": 0,
            "initialMapView": "EUROPE",
            "parties": [
                { "name": "Alpha", "shortName": "A", "countryCodes": ["AA"], "enemies": ["Beta"], "warheads": 1 },
                { "name": "Beta", "countryCodes": ["BB"], "enemies": ["Alpha"], "warheads": 0 }
            ]
        },
        {
            "short": "Full exchange",
            "description": "Both sides retaliate",
            "initialMapView": "world",
            "parties": [
                { "name": "Alpha", "countryCodes": ["AA"], "enemies": ["Beta"], "warheads": 3 },
                { "name": "Beta", "countryCodes": ["BB"], "enemies": ["Alpha"], "warheads": 4 }
            ]
        }
    ]
}"#;

fn world() -> WorldData {
    serde_json::from_str(WORLD).expect("test world parses")
}

fn start(seed: u64, scenario: usize) -> (SimulationEngine, WorldData) {
    let data = world();
    let config = SimConfig {
        seed,
        ..Default::default()
    };
    let engine = SimulationEngine::new(&config, &data, &data.scenarios[scenario]).unwrap();
    (engine, data)
}

#[test]
fn single_warhead_hits_only_enemy_city() {
    let (mut engine, _) = start(7, 0);
    assert_eq!(engine.scenario().all_nukes().len(), 1);

    // Longest possible wait: full launch delay plus the whole flight.
    let nuke = engine.scenario().all_nukes()[0];
    let duration = engine
        .scenario()
        .world()
        .get::<&thermo_sim::nuke::Nuke>(nuke)
        .unwrap()
        .flight_duration_secs();
    let budget = (60.0 + duration).ceil() as u64 + 1;

    engine.queue_command(SimCommand::Launch);
    let mut detonations = Vec::new();
    for _ in 0..budget {
        let snap = engine.tick(1.0).unwrap();
        detonations.extend(
            snap.events
                .into_iter()
                .filter(|e| matches!(e, SimEvent::Detonation { .. })),
        );
    }

    assert_eq!(engine.phase(), SimPhase::Terminated);
    assert_eq!(engine.scenario().all_detonations().len(), 1);
    assert_eq!(detonations.len(), 1);

    let outcome = engine.outcome();
    let beta = &outcome.parties[1];
    assert_eq!(beta.detonations_received, 1);
    assert!(beta.fatalities > 0);
    assert!(beta.fatalities < 1_000_000);
    assert_eq!(outcome.fatalities, beta.fatalities);
    assert_eq!(outcome.parties[0].fatalities, 0);
    assert_eq!(outcome.parties[0].short_name, "A");

    match &detonations[0] {
        SimEvent::Detonation {
            city,
            country_code,
            party,
            fatalities,
        } => {
            assert_eq!(city, "Betagrad");
            assert_eq!(country_code, "BB");
            assert_eq!(party, "Beta");
            assert_eq!(*fatalities, beta.fatalities);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn full_exchange_terminates_at_every_speed() {
    for speed in SimulationSpeed::ALL {
        let (mut engine, _) = start(99, 1);
        engine.queue_command(SimCommand::SetSpeed { speed });
        let ticks = engine.run_until_terminated(0.5, 100_000).unwrap();
        assert!(ticks < 100_000, "{speed:?} never terminated");

        let outcome = engine.outcome();
        assert_eq!(outcome.parties[0].detonations_received, 4, "{speed:?}");
        assert_eq!(outcome.parties[1].detonations_received, 3, "{speed:?}");
        assert!(outcome.parties.iter().all(|p| p.remaining == 0 && p.airborne == 0));
    }
}

#[test]
fn same_seed_same_outcome() {
    let (mut a, _) = start(2024, 1);
    let (mut b, _) = start(2024, 1);
    a.run_until_terminated(1.0, 10_000).unwrap();
    b.run_until_terminated(1.0, 10_000).unwrap();
    assert_eq!(a.outcome(), b.outcome());
    assert_eq!(a.clock(), b.clock());
    assert_eq!(a.scenario().first_strike(), b.scenario().first_strike());
}

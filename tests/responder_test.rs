mod helpers;

use rand::rngs::StdRng;
use rand::SeedableRng;

use banter::catalog::IntentCatalog;
use banter::responder::pick_response;

#[test]
fn every_intent_yields_one_of_its_own_responses() {
    let catalog = IntentCatalog::builtin();
    let mut rng = StdRng::seed_from_u64(99);

    let names: Vec<String> = catalog.iter().map(|(n, _)| n.to_string()).collect();
    for name in &names {
        for _ in 0..50 {
            let response = pick_response(&catalog, name, &mut rng).unwrap();
            let responses = &catalog.get(name).unwrap().responses;
            assert!(
                responses.iter().any(|r| r == response),
                "response {response:?} not in catalog entry {name:?}"
            );
        }
    }
}

#[test]
fn selection_eventually_covers_all_responses() {
    // uniform choice over three responses should hit each within 200 draws
    let catalog = IntentCatalog::builtin();
    let mut rng = StdRng::seed_from_u64(3);

    let responses = &catalog.get("greetings").unwrap().responses;
    let mut seen = vec![false; responses.len()];
    for _ in 0..200 {
        let picked = pick_response(&catalog, "greetings", &mut rng).unwrap();
        let idx = responses.iter().position(|r| r == picked).unwrap();
        seen[idx] = true;
    }
    assert!(seen.iter().all(|&s| s), "draws never covered: {seen:?}");
}

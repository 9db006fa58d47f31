//! Geo → pool → pick, over repeated trials.

use matchday_lib::affiliate::{eligible_pool, pick_offer};
use matchday_lib::geo::{parse_trace_country, GLOBAL_REGION};

#[test]
fn brazilian_picks_stay_inside_the_eligible_union() {
    let allowed = eligible_pool("BR");
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let pick = pick_offer("BR", &mut rng);
        assert!(allowed.contains(&pick), "{pick} escaped the BR pool");
    }
}

#[test]
fn undetected_visitors_draw_from_the_global_list() {
    assert_eq!(eligible_pool("XX"), eligible_pool(GLOBAL_REGION));
    let mut rng = rand::thread_rng();
    let allowed = eligible_pool(GLOBAL_REGION);
    for _ in 0..100 {
        assert!(allowed.contains(&pick_offer("XX", &mut rng)));
    }
}

#[test]
fn trace_detection_feeds_a_real_pool() {
    let body = "fl=1\nh=cf\nip=198.51.100.7\nloc=us\ntls=TLSv1.3";
    let country = parse_trace_country(body).unwrap();
    assert_eq!(country, "US");
    assert!(!eligible_pool(&country).is_empty());
}

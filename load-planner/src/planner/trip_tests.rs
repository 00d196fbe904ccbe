//! Unit tests for the trip planner.

use super::*;
use crate::planner::testing::{MockBoard, MockOracle, load_at};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn place(city: &str, state: &str) -> Place {
    Place::new(city, state)
}

fn dallas() -> Place {
    place("Dallas", "TX")
}

fn request(max_loads: usize) -> TripRequest {
    TripRequest::new(dallas(), date(1), 45_000, vec![EquipmentType::Van], max_loads)
}

#[tokio::test]
async fn partial_route_returns_home() {
    let mut board = MockBoard::new();
    board.add(
        &dallas(),
        date(1),
        vec![load_at("L1", ("Dallas", "TX"), ("Memphis", "TN"), date(1), 450.0, 2.0)],
    );
    let mut oracle = MockOracle::new();
    oracle.add(&place("Memphis", "TN"), &dallas(), 450.0);

    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);
    let trip = planner.plan(&request(3)).await.unwrap();

    let segments = trip.route.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].as_load().unwrap().id, "L1");
    let back = segments[1].as_deadhead().unwrap();
    assert_eq!(back.origin, place("Memphis", "TN"));
    assert_eq!(back.destination, dallas());
    assert_eq!(back.distance, 450.0);

    assert_eq!(
        trip.stop_reason,
        StopReason::NoCandidates {
            place: place("Memphis", "TN"),
            date: date(2),
        }
    );
    assert_eq!(trip.metrics.total_loads, 1);
    assert_eq!(trip.metrics.total_deadhead, 450.0);
    assert_eq!(board.call_count(), 2);
}

#[tokio::test]
async fn stops_at_max_loads() {
    let mut board = MockBoard::new();
    board.add(
        &dallas(),
        date(1),
        vec![load_at("L1", ("Dallas", "TX"), ("Tulsa", "OK"), date(1), 260.0, 2.0)],
    );
    board.add(
        &place("Tulsa", "OK"),
        date(2),
        vec![load_at("L2", ("Tulsa", "OK"), ("Memphis", "TN"), date(2), 400.0, 2.0)],
    );
    board.add(
        &place("Memphis", "TN"),
        date(3),
        vec![load_at("L3", ("Memphis", "TN"), ("Nashville", "TN"), date(3), 210.0, 2.0)],
    );
    board.add(
        &place("Nashville", "TN"),
        date(4),
        vec![load_at("L4", ("Nashville", "TN"), ("Dallas", "TX"), date(4), 660.0, 2.0)],
    );
    let mut oracle = MockOracle::new();
    oracle.add(&place("Nashville", "TN"), &dallas(), 660.0);

    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);
    let trip = planner.plan(&request(3)).await.unwrap();

    let ids: Vec<_> = trip.route.loads().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["L1", "L2", "L3"]);
    assert_eq!(trip.metrics.total_loads, 3);
    assert_eq!(trip.route.deadhead_count(), 1);
    assert!(trip.route.is_round_trip());
    assert_eq!(trip.stop_reason, StopReason::MaxLoadsReached);
    assert_eq!(board.call_count(), 3);

    // Each search starts where and when the previous leg ended
    let queries = board.queries();
    assert_eq!(queries[1].origin, place("Tulsa", "OK"));
    assert_eq!(queries[1].date, date(2));
    assert_eq!(queries[2].origin, place("Memphis", "TN"));
    assert_eq!(queries[2].date, date(3));
}

#[tokio::test]
async fn no_legs_is_no_route() {
    let board = MockBoard::new();
    let oracle = MockOracle::new();
    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);

    let result = planner.plan(&request(3)).await;
    assert!(matches!(
        result,
        Err(PlanError::NoRouteFound { ref origin, date: d }) if *origin == dallas() && d == date(1)
    ));
}

#[tokio::test]
async fn start_at_calendar_end_is_no_route() {
    let board = MockBoard::new();
    let oracle = MockOracle::new();
    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);

    let mut late = request(3);
    late.start_date = NaiveDate::MAX.pred_opt().unwrap();

    let result = planner.plan(&late).await;
    assert!(matches!(result, Err(PlanError::NoRouteFound { .. })));
    assert_eq!(board.call_count(), 0);
}

#[tokio::test]
async fn skips_leg_delivering_past_calendar_end() {
    let mut board = MockBoard::new();
    board.add(
        &dallas(),
        date(1),
        vec![
            load_at("endless", ("Dallas", "TX"), ("Tulsa", "OK"), date(1), 1.0e12, 2.0),
            load_at("L1", ("Dallas", "TX"), ("Waco", "TX"), date(1), 95.0, 2.0),
        ],
    );
    let oracle = MockOracle::new();

    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);
    let trip = planner.plan(&request(1)).await.unwrap();

    let ids: Vec<_> = trip.route.loads().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["L1"]);
}

#[tokio::test]
async fn only_leg_delivering_past_calendar_end_is_no_route() {
    let mut board = MockBoard::new();
    board.add(
        &dallas(),
        date(1),
        vec![load_at("endless", ("Dallas", "TX"), ("Tulsa", "OK"), date(1), 1.0e12, 2.0)],
    );
    let oracle = MockOracle::new();

    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);
    assert!(matches!(
        planner.plan(&request(1)).await,
        Err(PlanError::NoRouteFound { .. })
    ));
}

#[tokio::test]
async fn source_failure_keeps_partial_route() {
    let mut board = MockBoard::new();
    board.add(
        &dallas(),
        date(1),
        vec![load_at("L1", ("Dallas", "TX"), ("Tulsa", "OK"), date(1), 260.0, 2.0)],
    );
    board.fail_at(&place("Tulsa", "OK"), date(2));
    let oracle = MockOracle::new();

    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);
    let trip = planner.plan(&request(5)).await.unwrap();

    assert_eq!(trip.metrics.total_loads, 1);
    assert!(matches!(trip.stop_reason, StopReason::NoCandidates { .. }));
}

#[tokio::test]
async fn unknown_deadhead_distance_is_zero() {
    let mut board = MockBoard::new();
    board.add(
        &dallas(),
        date(1),
        vec![load_at("L1", ("Dallas", "TX"), ("Tulsa", "OK"), date(1), 260.0, 2.0)],
    );
    let oracle = MockOracle::new();

    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);
    let trip = planner.plan(&request(1)).await.unwrap();

    let back = trip.route.segments()[1].as_deadhead().unwrap();
    assert_eq!(back.distance, 0.0);
    assert_eq!(back.receive_date, back.ship_date + chrono::Duration::days(1));
    assert_eq!(trip.metrics.total_days, 3);
}

#[tokio::test]
async fn rateless_load_loses_to_long_cheap_load() {
    let mut board = MockBoard::new();
    board.add(
        &dallas(),
        date(1),
        vec![
            load_at("rateless", ("Dallas", "TX"), ("Tulsa", "OK"), date(1), 500.0, 0.0),
            load_at("long", ("Dallas", "TX"), ("Seattle", "WA"), date(1), 9999.0, 1.0),
        ],
    );
    let oracle = MockOracle::new();

    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);
    let trip = planner.plan(&request(1)).await.unwrap();

    let chosen: Vec<_> = trip.route.loads().map(|l| l.id.as_str()).collect();
    assert_eq!(chosen, ["long"]);
}

#[tokio::test]
async fn home_gravity_picks_leg_ending_near_home() {
    let mut board = MockBoard::new();
    board.add(
        &dallas(),
        date(1),
        vec![
            load_at("away", ("Dallas", "TX"), ("Denver", "CO"), date(1), 300.0, 2.0),
            load_at("near", ("Dallas", "TX"), ("Waco", "TX"), date(1), 300.0, 2.0),
        ],
    );
    let mut oracle = MockOracle::new();
    oracle.add(&place("Denver", "CO"), &dallas(), 790.0);
    oracle.add(&place("Waco", "TX"), &dallas(), 95.0);

    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);
    let trip = planner.plan(&request(1)).await.unwrap();

    let chosen = trip.route.loads().next().unwrap();
    assert_eq!(chosen.id, "near");
}

#[tokio::test]
async fn leg_gets_revenue_and_delivery_date() {
    let mut board = MockBoard::new();
    let mut posted = load_at("L1", ("Dallas", "TX"), ("Dallas", "TX"), date(1), 1200.0, 2.0);
    posted.pay_rate = 3100.0;
    posted.receive_date = Some(date(20));
    board.add(&dallas(), date(1), vec![posted]);
    let oracle = MockOracle::new();

    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);
    let trip = planner.plan(&request(1)).await.unwrap();

    let leg = trip.route.loads().next().unwrap();
    assert_eq!(leg.revenue, Some(3100.0));
    assert_eq!(leg.receive_date, Some(date(4)));
    assert_eq!(trip.metrics.total_revenue, 3100.0);
}

#[tokio::test]
async fn query_carries_request_details() {
    let board = MockBoard::new();
    let oracle = MockOracle::new();
    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);

    let request = TripRequest::new(
        dallas(),
        date(1),
        40_000,
        vec![EquipmentType::Van, EquipmentType::Reefer],
        2,
    )
    .with_home_base("843982");
    let _ = planner.plan(&request).await;

    let query = &board.queries()[0];
    assert_eq!(query.max_weight, 40_000);
    assert_eq!(query.equipment, [EquipmentType::Van, EquipmentType::Reefer]);
    assert_eq!(query.account_id.as_deref(), Some("843982"));
    assert!(!query.backhaul);
}

#[tokio::test]
async fn invalid_request_is_rejected() {
    let board = MockBoard::new();
    let oracle = MockOracle::new();
    let config = PlannerConfig::default();
    let planner = TripPlanner::new(&board, &oracle, &config);

    let result = planner.plan(&request(0)).await;
    assert!(matches!(result, Err(PlanError::InvalidRequest(_))));

    let mut no_equipment = request(2);
    no_equipment.equipment.clear();
    let result = planner.plan(&no_equipment).await;
    assert!(matches!(result, Err(PlanError::InvalidRequest(_))));

    assert_eq!(board.call_count(), 0);
}

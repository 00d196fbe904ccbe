//! Route stitching.
//!
//! Turns an ordered list of chosen legs into a contiguous [`Route`] that
//! starts and ends at home, filling every gap with a deadhead move.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::{Deadhead, DomainError, Place, Route, Segment, add_days, travel_days};

use super::source::DistanceOracle;

/// Stitch `segments` into a route from and back to `home`.
///
/// A deadhead is inserted wherever a segment doesn't start where the
/// previous one ended, and one is appended to get back home. Deadhead
/// distances come from `oracle`; when it has no answer the move is recorded
/// as 0 miles, which still takes a day.
///
/// Loads without a delivery date, or with one before their pickup, get
/// `ship_date + travel_days(distance)`, pinned to `NaiveDate::MAX` if that
/// runs off the end of the calendar.
pub async fn stitch<D: DistanceOracle>(
    segments: Vec<Segment>,
    home: &Place,
    start_date: NaiveDate,
    oracle: &D,
) -> Result<Route, DomainError> {
    let mut stitched = Vec::with_capacity(segments.len() * 2 + 1);
    let mut location = home.clone();
    let mut date = start_date;

    for segment in segments {
        if segment.origin() != &location {
            let deadhead = deadhead(&location, segment.origin(), date, oracle).await;
            date = deadhead.receive_date;
            stitched.push(Segment::Deadhead(deadhead));
        }

        let segment = with_receive_date(segment);
        location = segment.destination().clone();
        date = segment.receive_date().unwrap_or(date);
        stitched.push(segment);
    }

    if &location != home {
        let deadhead = deadhead(&location, home, date, oracle).await;
        stitched.push(Segment::Deadhead(deadhead));
    }

    debug!(
        segments = stitched.len(),
        deadheads = stitched.iter().filter(|s| s.is_deadhead()).count(),
        "Stitched route"
    );

    Route::new(stitched)
}

async fn deadhead<D: DistanceOracle>(
    from: &Place,
    to: &Place,
    ship_date: NaiveDate,
    oracle: &D,
) -> Deadhead {
    let distance = match oracle.driving_distance(from, to).await {
        Some(drive) => drive.miles,
        None => {
            warn!(%from, %to, "No driving distance for deadhead; recording 0 miles");
            0.0
        }
    };
    Deadhead::new(from.clone(), to.clone(), distance, ship_date)
}

fn with_receive_date(segment: Segment) -> Segment {
    match segment {
        Segment::Load(mut load) => {
            let valid = load
                .receive_date
                .is_some_and(|received| received >= load.ship_date);
            if !valid {
                let received = add_days(load.ship_date, travel_days(load.distance));
                load.receive_date = Some(received.unwrap_or(NaiveDate::MAX));
            }
            Segment::Load(load)
        }
        deadhead @ Segment::Deadhead(_) => deadhead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::testing::{MockOracle, load_at};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn dallas() -> Place {
        Place::new("Dallas", "TX")
    }

    #[tokio::test]
    async fn empty_input_is_empty_route() {
        let oracle = MockOracle::new();
        let route = stitch(vec![], &dallas(), date(1), &oracle).await.unwrap();
        assert!(route.is_empty());
        assert_eq!(oracle.call_count(), 0);
    }

    #[tokio::test]
    async fn round_trip_needs_no_deadhead() {
        let oracle = MockOracle::new();
        let out = load_at("out", ("Dallas", "TX"), ("Tulsa", "OK"), date(1), 260.0, 2.0);
        let back = load_at("back", ("Tulsa", "OK"), ("Dallas", "TX"), date(2), 260.0, 2.0);

        let route = stitch(
            vec![Segment::Load(out), Segment::Load(back)],
            &dallas(),
            date(1),
            &oracle,
        )
        .await
        .unwrap();

        assert_eq!(route.len(), 2);
        assert_eq!(route.deadhead_count(), 0);
        assert_eq!(route.segments()[0].receive_date(), Some(date(2)));
        assert_eq!(route.segments()[1].receive_date(), Some(date(3)));
        assert_eq!(oracle.call_count(), 0);
    }

    #[tokio::test]
    async fn fills_gaps_and_returns_home() {
        let mut oracle = MockOracle::new();
        let tulsa = Place::new("Tulsa", "OK");
        let memphis = Place::new("Memphis", "TN");
        let nashville = Place::new("Nashville", "TN");
        oracle.add(&dallas(), &tulsa, 260.0);
        oracle.add(&memphis, &nashville, 210.0);
        oracle.add(&Place::new("Atlanta", "GA"), &dallas(), 780.0);

        let first = load_at("1", ("Tulsa", "OK"), ("Memphis", "TN"), date(2), 400.0, 2.0);
        let second = load_at("2", ("Nashville", "TN"), ("Atlanta", "GA"), date(4), 250.0, 2.0);

        let route = stitch(
            vec![Segment::Load(first), Segment::Load(second)],
            &dallas(),
            date(1),
            &oracle,
        )
        .await
        .unwrap();

        let shape: Vec<_> = route
            .segments()
            .iter()
            .map(|s| (s.is_deadhead(), s.origin().city.as_str(), s.distance()))
            .collect();
        assert_eq!(
            shape,
            [
                (true, "Dallas", 260.0),
                (false, "Tulsa", 400.0),
                (true, "Memphis", 210.0),
                (false, "Nashville", 250.0),
                (true, "Atlanta", 780.0),
            ]
        );
        assert!(route.is_round_trip());

        // Deadheads leave when the truck is free
        let segments = route.segments();
        assert_eq!(segments[0].ship_date(), date(1));
        assert_eq!(segments[2].ship_date(), date(3));
        assert_eq!(segments[4].ship_date(), date(5));
        assert_eq!(segments[4].receive_date(), Some(date(7)));
    }

    #[tokio::test]
    async fn unknown_distance_is_zero_and_one_day() {
        let oracle = MockOracle::new();
        let load = load_at("1", ("Dallas", "TX"), ("Tulsa", "OK"), date(1), 260.0, 2.0);

        let route = stitch(vec![Segment::Load(load)], &dallas(), date(1), &oracle)
            .await
            .unwrap();

        let back = route.segments()[1].as_deadhead().unwrap();
        assert_eq!(back.distance, 0.0);
        assert_eq!(back.ship_date, date(2));
        assert_eq!(back.receive_date, date(3));
        assert_eq!(oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn unknown_connecting_distance_is_zero_and_one_day() {
        let mut oracle = MockOracle::new();
        oracle.add(&Place::new("Nashville", "TN"), &dallas(), 660.0);

        let first = load_at("1", ("Dallas", "TX"), ("Memphis", "TN"), date(1), 450.0, 2.0);
        let second = load_at("2", ("Little Rock", "AR"), ("Nashville", "TN"), date(3), 350.0, 2.0);

        let route = stitch(
            vec![Segment::Load(first), Segment::Load(second)],
            &dallas(),
            date(1),
            &oracle,
        )
        .await
        .unwrap();

        assert_eq!(route.len(), 4);
        let gap = route.segments()[1].as_deadhead().unwrap();
        assert_eq!(gap.origin, Place::new("Memphis", "TN"));
        assert_eq!(gap.destination, Place::new("Little Rock", "AR"));
        assert_eq!(gap.distance, 0.0);
        assert_eq!(gap.ship_date, date(2));
        assert_eq!(gap.receive_date, date(3));
        assert_eq!(route.segments()[3].distance(), 660.0);
        assert!(route.is_round_trip());
    }

    #[tokio::test]
    async fn delivery_past_calendar_end_is_pinned() {
        let oracle = MockOracle::new();
        let load = load_at("1", ("Dallas", "TX"), ("Dallas", "TX"), date(1), 1.0e12, 2.0);

        let route = stitch(vec![Segment::Load(load)], &dallas(), date(1), &oracle)
            .await
            .unwrap();
        assert_eq!(route.end_date(), Some(NaiveDate::MAX));
    }

    #[tokio::test]
    async fn keeps_board_delivery_date() {
        let oracle = MockOracle::new();
        let mut load = load_at("1", ("Dallas", "TX"), ("Dallas", "TX"), date(1), 20.0, 2.0);
        load.receive_date = Some(date(5));

        let route = stitch(vec![Segment::Load(load)], &dallas(), date(1), &oracle)
            .await
            .unwrap();
        assert_eq!(route.end_date(), Some(date(5)));
    }

    #[tokio::test]
    async fn repairs_delivery_before_pickup() {
        let oracle = MockOracle::new();
        let mut load = load_at("1", ("Dallas", "TX"), ("Dallas", "TX"), date(4), 1200.0, 2.0);
        load.receive_date = Some(date(2));

        let route = stitch(vec![Segment::Load(load)], &dallas(), date(1), &oracle)
            .await
            .unwrap();
        assert_eq!(route.end_date(), Some(date(7)));
    }
}

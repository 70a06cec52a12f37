#[path = "../test_cases.rs"]
mod test_cases;
use test_cases::*;

#[test]
fn propagate() -> anyhow::Result<()> {
    let test_cases: TestCases = toml::from_str(include_str!("../test_cases.toml")).unwrap();
    for test_case in test_cases.list.iter() {
        let tle = norad_sgp4::decode_tle(None, &test_case.line1, &test_case.line2)
            .map_err(|error| anyhow::anyhow!("{error}"))?;
        let state = norad_sgp4::PropagatorState::build(&norad_sgp4::WGS72, &tle)
            .map_err(|error| anyhow::anyhow!("{error}"))?;
        for test_state in &test_case.states {
            match test_state {
                State::Ok {
                    time,
                    position,
                    velocity,
                    ..
                } => {
                    let prediction = state
                        .propagate(*time)
                        .map_err(|error| anyhow::anyhow!("{error}"))?;
                    for index in 0..3 {
                        assert!((position[index] - prediction.position[index]).abs() < 1.0e-6);
                        assert!((velocity[index] - prediction.velocity[index]).abs() < 1.0e-6);
                    }
                }
                State::Err { time, error } => match state.propagate(*time) {
                    Err(prediction_error) => assert_eq!(error, &prediction_error.to_string()),
                    Ok(_) => panic!("propagation should have returned an error"),
                },
            }
        }
    }
    Ok(())
}

/// Satellite 11801 has period > 225 min (deep-space) but its mean motion
/// falls just outside the half-day resonance band (680-761 min), so it
/// propagates via the non-resonant deep-space path.
#[test]
fn satellite_11801_is_deep_space_non_resonant() -> anyhow::Result<()> {
    let tle = norad_sgp4::decode_tle(
        None,
        "1 11801U          80230.29629788  .01431103  00000-0  14311-1       8",
        "2 11801  46.7916 230.4354 7318036  47.4722  10.4117  2.28537848    13",
    )
    .map_err(|error| anyhow::anyhow!("{error}"))?;
    let state = norad_sgp4::PropagatorState::build(&norad_sgp4::WGS72, &tle)
        .map_err(|error| anyhow::anyhow!("{error}"))?;
    assert!(state.is_deep_space());
    assert_eq!(state.resonance(), None);
    Ok(())
}

/// Universal invariant: position magnitude never dips below the earth's
/// radius, for every test case at every offset it is exercised at.
#[test]
fn position_never_dips_below_earth_radius() -> anyhow::Result<()> {
    let test_cases: TestCases = toml::from_str(include_str!("../test_cases.toml")).unwrap();
    for test_case in test_cases.list.iter() {
        let tle = norad_sgp4::decode_tle(None, &test_case.line1, &test_case.line2)
            .map_err(|error| anyhow::anyhow!("{error}"))?;
        let state = norad_sgp4::PropagatorState::build(&norad_sgp4::WGS72, &tle)
            .map_err(|error| anyhow::anyhow!("{error}"))?;
        for test_state in &test_case.states {
            if let State::Ok { time, .. } = test_state {
                let prediction = state
                    .propagate(*time)
                    .map_err(|error| anyhow::anyhow!("{error}"))?;
                let magnitude = prediction
                    .position
                    .iter()
                    .map(|component| component.powi(2))
                    .sum::<f64>()
                    .sqrt();
                assert!(magnitude > norad_sgp4::WGS72.earth_radius_km);
            }
        }
    }
    Ok(())
}

/// Long-horizon stability: satellite 06251 stays in a plausible LEO shell
/// at every 360-minute offset across two full days.
#[test]
fn long_horizon_sweep_stays_in_leo_shell() -> anyhow::Result<()> {
    let tle = norad_sgp4::decode_tle(
        None,
        "1 06251U 62025E   06176.82412014  .00008885  00000-0  12808-3 0  3985",
        "2 06251  58.0579  54.0425 0030035 139.1568 221.1854 15.56387291  6774",
    )
    .map_err(|error| anyhow::anyhow!("{error}"))?;
    let state = norad_sgp4::PropagatorState::build(&norad_sgp4::WGS72, &tle)
        .map_err(|error| anyhow::anyhow!("{error}"))?;
    let mut t = 0.0;
    while t <= 2880.0 {
        let prediction = state
            .propagate(t)
            .map_err(|error| anyhow::anyhow!("{error}"))?;
        let magnitude = prediction
            .position
            .iter()
            .map(|component| component.powi(2))
            .sum::<f64>()
            .sqrt();
        assert!(magnitude.is_finite());
        assert!((6371.0..8000.0).contains(&magnitude));
        t += 360.0;
    }
    Ok(())
}

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MIN_SEGMENT_KM: f64 = 0.005;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoFix {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

pub fn haversine_km(a: GeoFix, b: GeoFix) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[derive(Debug, Default)]
pub struct WalkSession {
    active: bool,
    total_km: f64,
    last_fix: Option<GeoFix>,
    started_at_ms: Option<u64>,
    stopped_at_ms: Option<u64>,
}

impl WalkSession {
    pub fn start(&mut self, now_ms: u64) {
        self.active = true;
        self.total_km = 0.0;
        self.last_fix = None;
        self.started_at_ms = Some(now_ms);
        self.stopped_at_ms = None;
    }

    pub fn stop(&mut self, now_ms: u64) {
        if self.active {
            self.active = false;
            self.stopped_at_ms = Some(now_ms);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn total_km(&self) -> f64 {
        self.total_km
    }

    // The reference point advances on every fix, including ones dropped as
    // noise, so drift below the floor never adds up.
    pub fn on_fix(&mut self, fix: GeoFix) -> f64 {
        if !self.active {
            return 0.0;
        }
        let added = match self.last_fix {
            Some(last) => {
                let segment = haversine_km(last, fix);
                if segment > MIN_SEGMENT_KM { segment } else { 0.0 }
            }
            None => 0.0,
        };
        self.total_km += added;
        self.last_fix = Some(fix);
        added
    }

    pub fn duration_secs(&self, now_ms: u64) -> u64 {
        let Some(start) = self.started_at_ms else {
            return 0;
        };
        let end = if self.active {
            now_ms
        } else {
            self.stopped_at_ms.unwrap_or(now_ms)
        };
        end.saturating_sub(start) / 1000
    }

    pub fn avg_speed_kmh(&self, now_ms: u64) -> f64 {
        let secs = self.duration_secs(now_ms);
        if secs == 0 {
            return 0.0;
        }
        self.total_km / (secs as f64 / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let km = haversine_km(GeoFix::new(0.0, 0.0), GeoFix::new(1.0, 0.0));
        assert!((km - 111.19).abs() < 0.1, "got {km}");
    }

    #[test]
    fn ten_meter_fixes_accumulate() {
        let mut walk = WalkSession::default();
        walk.start(0);
        walk.on_fix(GeoFix::new(47.0, 8.0));
        // 0.00009 deg of latitude is roughly 10 m.
        let added = walk.on_fix(GeoFix::new(47.000_09, 8.0));
        assert!(added > 0.009 && added < 0.011, "got {added}");
        assert!((walk.total_km() - added).abs() < 1e-12);
    }

    #[test]
    fn three_meter_fixes_are_noise() {
        let mut walk = WalkSession::default();
        walk.start(0);
        walk.on_fix(GeoFix::new(47.0, 8.0));
        let added = walk.on_fix(GeoFix::new(47.000_027, 8.0));
        assert_eq!(added, 0.0);
        assert_eq!(walk.total_km(), 0.0);
    }

    #[test]
    fn sub_floor_drift_never_accumulates() {
        let mut walk = WalkSession::default();
        walk.start(0);
        for i in 0..11 {
            walk.on_fix(GeoFix::new(47.0 + 0.000_027 * i as f64, 8.0));
        }
        assert_eq!(walk.total_km(), 0.0);
    }

    #[test]
    fn fixes_outside_a_walk_are_ignored() {
        let mut walk = WalkSession::default();
        assert_eq!(walk.on_fix(GeoFix::new(47.0, 8.0)), 0.0);

        walk.start(0);
        walk.on_fix(GeoFix::new(47.0, 8.0));
        walk.stop(60_000);
        assert_eq!(walk.on_fix(GeoFix::new(47.01, 8.0)), 0.0);
        assert_eq!(walk.total_km(), 0.0);
    }

    #[test]
    fn duration_freezes_on_stop_and_restart_zeroes() {
        let mut walk = WalkSession::default();
        walk.start(10_000);
        assert_eq!(walk.duration_secs(70_000), 60);

        walk.stop(70_000);
        assert_eq!(walk.duration_secs(200_000), 60);

        walk.start(300_000);
        assert!(walk.is_active());
        assert_eq!(walk.total_km(), 0.0);
        assert_eq!(walk.duration_secs(300_000), 0);
    }

    #[test]
    fn average_speed_is_km_per_hour() {
        let mut walk = WalkSession::default();
        walk.start(0);
        walk.on_fix(GeoFix::new(0.0, 0.0));
        walk.on_fix(GeoFix::new(0.01, 0.0)); // ~1.112 km
        let speed = walk.avg_speed_kmh(600_000); // 10 minutes
        assert!((speed - 6.67).abs() < 0.1, "got {speed}");
    }

    #[test]
    fn zero_duration_speed_is_zero() {
        let mut walk = WalkSession::default();
        walk.start(0);
        assert_eq!(walk.avg_speed_kmh(500), 0.0);
    }
}

use serde::{Deserialize, Serialize};
use std::env;

pub const DAILY_STEP_GOAL: u64 = 10_000;
pub const CALORIES_PER_STEP: f64 = 0.04;
pub const STEP_LENGTH_KM: f64 = 0.000_75;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotionSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub timestamp_ms: u64,
}

impl MotionSample {
    pub fn new(x: f64, y: f64, z: f64, timestamp_ms: u64) -> Self {
        Self { x, y, z, timestamp_ms }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepDetectorConfig {
    pub threshold: f64,
    pub cooldown_ms: u64,
    pub step_length_km: f64,
}

impl StepDetectorConfig {
    // Feeds that include gravity idle near 9.81.
    pub fn raw_magnitude() -> Self {
        Self {
            threshold: 12.0,
            cooldown_ms: 400,
            step_length_km: STEP_LENGTH_KM,
        }
    }

    // Gravity-compensated feeds idle near zero.
    pub fn linear_accel() -> Self {
        Self {
            threshold: 1.3,
            cooldown_ms: 250,
            step_length_km: STEP_LENGTH_KM,
        }
    }

    pub fn from_env() -> Self {
        let mut config = match env::var("STEP_PRESET").as_deref() {
            Ok("linear") => Self::linear_accel(),
            _ => Self::raw_magnitude(),
        };
        if let Some(threshold) = env::var("STEP_THRESHOLD")
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
        {
            config.threshold = threshold;
        }
        if let Some(cooldown) = env::var("STEP_COOLDOWN_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
        {
            config.cooldown_ms = cooldown;
        }
        config
    }
}

impl Default for StepDetectorConfig {
    fn default() -> Self {
        Self::raw_magnitude()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StepEvent {
    pub timestamp_ms: u64,
    pub total_steps: u64,
    pub peak_magnitude: f64,
}

#[derive(Debug)]
pub struct StepDetector {
    config: StepDetectorConfig,
    previous_magnitude: f64,
    peak_armed: bool,
    peak_magnitude: f64,
    last_step_ms: Option<u64>,
    steps: u64,
}

impl StepDetector {
    pub fn new(config: StepDetectorConfig) -> Self {
        Self {
            config,
            previous_magnitude: 0.0,
            peak_armed: false,
            peak_magnitude: 0.0,
            last_step_ms: None,
            steps: 0,
        }
    }

    // The cooldown gates both edges: no peak arms and no step completes
    // until it has elapsed since the last counted step.
    pub fn on_sample(&mut self, sample: &MotionSample) -> Option<StepEvent> {
        let magnitude = sample.magnitude();
        let threshold = self.config.threshold;
        let mut event = None;

        // A timestamp behind the last counted step means the client clock
        // restarted; the cooldown reference only makes sense on the clock
        // that set it.
        if self.last_step_ms.is_some_and(|last| sample.timestamp_ms < last) {
            self.last_step_ms = None;
        }

        if self.cooldown_elapsed(sample.timestamp_ms) {
            if magnitude > threshold && self.previous_magnitude <= threshold {
                self.peak_armed = true;
                self.peak_magnitude = magnitude;
            } else if self.peak_armed && magnitude > self.peak_magnitude {
                self.peak_magnitude = magnitude;
            }

            if self.peak_armed && magnitude < threshold && self.previous_magnitude >= threshold {
                self.steps += 1;
                self.last_step_ms = Some(sample.timestamp_ms);
                self.peak_armed = false;
                event = Some(StepEvent {
                    timestamp_ms: sample.timestamp_ms,
                    total_steps: self.steps,
                    peak_magnitude: self.peak_magnitude,
                });
            }
        }

        self.previous_magnitude = magnitude;
        event
    }

    pub fn on_batch(&mut self, samples: &[MotionSample]) -> Vec<StepEvent> {
        let mut events = Vec::new();
        for sample in samples {
            if let Some(event) = self.on_sample(sample) {
                events.push(event);
            }
        }
        events
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn config(&self) -> &StepDetectorConfig {
        &self.config
    }

    pub fn distance_km(&self) -> f64 {
        self.steps as f64 * self.config.step_length_km
    }

    pub fn seed(&mut self, steps: u64) {
        self.steps = steps;
    }

    pub fn reset(&mut self) {
        self.steps = 0;
        self.previous_magnitude = 0.0;
        self.peak_armed = false;
        self.peak_magnitude = 0.0;
        self.last_step_ms = None;
    }

    fn cooldown_elapsed(&self, now_ms: u64) -> bool {
        match self.last_step_ms {
            // No step yet, so a client clock that starts near zero must not
            // swallow the first one.
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.config.cooldown_ms,
        }
    }
}

pub fn calories_for(steps: u64) -> u64 {
    (steps as f64 * CALORIES_PER_STEP).round() as u64
}

pub fn goal_percent(steps: u64) -> f64 {
    (steps as f64 / DAILY_STEP_GOAL as f64).min(1.0) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorGate {
    Unrequested,
    Granted,
    Denied,
    Unavailable,
}

impl SensorGate {
    pub fn allows_samples(self) -> bool {
        matches!(self, SensorGate::Granted)
    }

    pub fn status_message(self) -> &'static str {
        match self {
            SensorGate::Unrequested => "Tap Start Step Tracking to enable the motion sensor",
            SensorGate::Granted => "Motion sensor active",
            SensorGate::Denied => "Motion permission denied. Enable it in your device settings.",
            SensorGate::Unavailable => "Device motion not supported on this device",
        }
    }
}

#[derive(Debug)]
pub struct MotionTracker {
    pub detector: StepDetector,
    pub gate: SensorGate,
}

impl MotionTracker {
    pub fn new(config: StepDetectorConfig) -> Self {
        Self {
            detector: StepDetector::new(config),
            gate: SensorGate::Unrequested,
        }
    }

    pub fn ingest(&mut self, samples: &[MotionSample]) -> u64 {
        if !self.gate.allows_samples() {
            return 0;
        }
        self.detector.on_batch(samples).len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(magnitude: f64, timestamp_ms: u64) -> MotionSample {
        MotionSample::new(magnitude, 0.0, 0.0, timestamp_ms)
    }

    fn linear_detector() -> StepDetector {
        StepDetector::new(StepDetectorConfig::linear_accel())
    }

    #[test]
    fn magnitude_is_euclidean_norm() {
        let sample = MotionSample::new(3.0, 4.0, 12.0, 0);
        assert!((sample.magnitude() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn rise_then_fall_counts_one_step() {
        let mut detector = linear_detector();
        assert!(detector.on_sample(&flat(0.5, 1_000)).is_none());
        assert!(detector.on_sample(&flat(1.5, 1_300)).is_none());
        let event = detector.on_sample(&flat(0.4, 1_600)).expect("step");
        assert_eq!(event.total_steps, 1);
        assert_eq!(event.timestamp_ms, 1_600);
        assert!((event.peak_magnitude - 1.5).abs() < 1e-9);
        assert_eq!(detector.step_count(), 1);
    }

    #[test]
    fn staying_above_threshold_counts_once() {
        let mut detector = linear_detector();
        detector.on_sample(&flat(0.5, 0));
        detector.on_sample(&flat(1.5, 300));
        detector.on_sample(&flat(1.8, 600));
        detector.on_sample(&flat(1.6, 900));
        let event = detector.on_sample(&flat(0.3, 1_200)).expect("step");
        assert!((event.peak_magnitude - 1.8).abs() < 1e-9);
        assert_eq!(detector.step_count(), 1);
    }

    #[test]
    fn rising_edge_inside_cooldown_does_not_arm() {
        let mut detector = linear_detector();
        detector.on_sample(&flat(0.5, 1_000));
        detector.on_sample(&flat(1.5, 1_300));
        assert!(detector.on_sample(&flat(0.4, 1_600)).is_some());

        // Rising edge 100 ms after the step lands inside the 250 ms cooldown,
        // so no peak arms and the later falling edge has nothing to confirm.
        detector.on_sample(&flat(1.5, 1_700));
        assert!(detector.on_sample(&flat(0.4, 1_900)).is_none());
        assert_eq!(detector.step_count(), 1);

        detector.on_sample(&flat(1.5, 2_300));
        assert!(detector.on_sample(&flat(0.4, 2_600)).is_some());
        assert_eq!(detector.step_count(), 2);
    }

    #[test]
    fn walking_pattern_counts_every_cycle() {
        let mut detector = StepDetector::new(StepDetectorConfig::raw_magnitude());
        let mut t = 0;
        for _ in 0..8 {
            detector.on_sample(&flat(9.8, t));
            detector.on_sample(&flat(14.0, t + 200));
            detector.on_sample(&flat(9.5, t + 400));
            t += 600;
        }
        assert_eq!(detector.step_count(), 8);
    }

    #[test]
    fn quiet_signal_counts_nothing() {
        let mut detector = linear_detector();
        for i in 0..50 {
            detector.on_sample(&flat(0.2 + 0.01 * (i % 5) as f64, i * 100));
        }
        assert_eq!(detector.step_count(), 0);
    }

    #[test]
    fn first_step_counts_even_with_small_timestamps() {
        let mut detector = StepDetector::new(StepDetectorConfig::raw_magnitude());
        detector.on_sample(&flat(13.0, 10));
        assert!(detector.on_sample(&flat(9.0, 30)).is_some());
    }

    #[test]
    fn restarted_clock_does_not_suppress_steps() {
        let mut detector = StepDetector::new(StepDetectorConfig::raw_magnitude());
        detector.on_sample(&flat(9.8, 600_000));
        detector.on_sample(&flat(14.0, 600_200));
        assert!(detector.on_sample(&flat(9.5, 600_400)).is_some());

        // Timestamps restart near zero, as after a page reload.
        let mut t = 1_000;
        for _ in 0..20 {
            detector.on_sample(&flat(9.8, t));
            detector.on_sample(&flat(14.0, t + 200));
            detector.on_sample(&flat(9.5, t + 400));
            t += 600;
        }
        assert_eq!(detector.step_count(), 21);
    }

    #[test]
    fn seed_restores_count_and_reset_clears_it() {
        let mut detector = linear_detector();
        detector.seed(4_200);
        assert_eq!(detector.step_count(), 4_200);

        detector.on_sample(&flat(0.5, 0));
        detector.on_sample(&flat(1.5, 300));
        detector.on_sample(&flat(0.4, 600));
        assert_eq!(detector.step_count(), 4_201);

        detector.reset();
        assert_eq!(detector.step_count(), 0);
        assert_eq!(detector.distance_km(), 0.0);
    }

    #[test]
    fn distance_follows_step_length() {
        let mut detector = StepDetector::new(StepDetectorConfig::default());
        detector.seed(1_000);
        assert!((detector.distance_km() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn derived_metrics_round_and_clamp() {
        assert_eq!(calories_for(2_500), 100);
        assert_eq!(calories_for(0), 0);
        assert!((goal_percent(5_000) - 50.0).abs() < 1e-9);
        assert_eq!(goal_percent(25_000), 100.0);
    }

    #[test]
    fn gate_blocks_ingestion_until_granted() {
        let mut tracker = MotionTracker::new(StepDetectorConfig::linear_accel());
        let burst = vec![flat(0.5, 0), flat(1.5, 300), flat(0.4, 600)];

        assert_eq!(tracker.ingest(&burst), 0);
        assert_eq!(tracker.detector.step_count(), 0);

        tracker.gate = SensorGate::Granted;
        assert_eq!(tracker.ingest(&burst), 1);
        assert_eq!(tracker.detector.step_count(), 1);

        tracker.gate = SensorGate::Denied;
        let later: Vec<_> = burst
            .iter()
            .map(|s| MotionSample::new(s.x, s.y, s.z, s.timestamp_ms + 10_000))
            .collect();
        assert_eq!(tracker.ingest(&later), 0);
        assert_eq!(tracker.detector.step_count(), 1);
    }
}

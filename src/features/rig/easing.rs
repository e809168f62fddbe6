//! Fixed-duration one-shot eases driven by the rig's own tick clock.
//!
//! Absolute eases move a channel from a start value to an end value; a new
//! absolute ease on the same channel replaces the running one. Relative eases
//! spread a delta over their duration and stack with each other.

/// Rig values driven by eases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EaseChannel {
    CameraPitch,
    PivotYaw,
}

/// What an ease asks its channel to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EaseStep {
    Set(f32),
    Add(f32),
}

#[derive(Debug, Clone, Copy)]
enum EaseMode {
    Absolute { start: f32, end: f32 },
    Relative { delta: f32 },
}

#[derive(Debug, Clone, Copy)]
struct EaseTask {
    channel: EaseChannel,
    mode: EaseMode,
    duration: f32,
    elapsed: f32,
}

impl EaseTask {
    fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EaseScheduler {
    tasks: Vec<EaseTask>,
}

impl EaseScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Eases `channel` linearly from `start` to `end` over `duration` seconds.
    pub fn ease_to(&mut self, channel: EaseChannel, start: f32, end: f32, duration: f32) {
        self.tasks.retain(|task| {
            !(task.channel == channel && matches!(task.mode, EaseMode::Absolute { .. }))
        });
        self.tasks.push(EaseTask {
            channel,
            mode: EaseMode::Absolute { start, end },
            duration,
            elapsed: 0.0,
        });
    }

    /// Adds `delta` to `channel` spread linearly over `duration` seconds.
    pub fn ease_by(&mut self, channel: EaseChannel, delta: f32, duration: f32) {
        if delta == 0.0 {
            return;
        }
        self.tasks.push(EaseTask {
            channel,
            mode: EaseMode::Relative { delta },
            duration,
            elapsed: 0.0,
        });
    }

    /// Advances every task by `dt`, reporting each step in scheduling order,
    /// and retires finished tasks.
    pub fn advance(&mut self, dt: f32, mut apply: impl FnMut(EaseChannel, EaseStep)) {
        for task in &mut self.tasks {
            let before = task.progress(task.elapsed);
            task.elapsed += dt.max(0.0);
            let after = task.progress(task.elapsed);

            let step = match task.mode {
                EaseMode::Absolute { start, end } => EaseStep::Set(start + (end - start) * after),
                EaseMode::Relative { delta } => EaseStep::Add(delta * (after - before)),
            };
            apply(task.channel, step);
        }
        self.tasks.retain(|task| task.progress(task.elapsed) < 1.0);
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(scheduler: &mut EaseScheduler, dt: f32, value: &mut f32) {
        scheduler.advance(dt, |_, step| match step {
            EaseStep::Set(v) => *value = v,
            EaseStep::Add(d) => *value += d,
        });
    }

    #[test]
    fn test_absolute_ease_reaches_end_after_duration() {
        let mut scheduler = EaseScheduler::new();
        let mut value = 0.0;
        scheduler.ease_to(EaseChannel::CameraPitch, 0.0, 10.0, 0.1);

        run(&mut scheduler, 0.05, &mut value);
        assert!((value - 5.0).abs() < 1e-4);
        run(&mut scheduler, 0.05, &mut value);
        assert!((value - 10.0).abs() < 1e-4);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_absolute_ease_replaces_previous() {
        let mut scheduler = EaseScheduler::new();
        scheduler.ease_to(EaseChannel::CameraPitch, 0.0, 10.0, 0.1);
        scheduler.ease_to(EaseChannel::CameraPitch, 0.0, -10.0, 0.1);
        assert_eq!(scheduler.active_count(), 1);

        let mut value = 0.0;
        run(&mut scheduler, 0.1, &mut value);
        assert!((value + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_relative_eases_stack() {
        let mut scheduler = EaseScheduler::new();
        scheduler.ease_by(EaseChannel::PivotYaw, 30.0, 0.1);
        scheduler.ease_by(EaseChannel::PivotYaw, 15.0, 0.1);
        assert_eq!(scheduler.active_count(), 2);

        let mut value = 100.0;
        for _ in 0..5 {
            run(&mut scheduler, 0.025, &mut value);
        }
        assert!((value - 145.0).abs() < 1e-3);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_relative_zero_delta_is_skipped() {
        let mut scheduler = EaseScheduler::new();
        scheduler.ease_by(EaseChannel::PivotYaw, 0.0, 0.1);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_overshooting_dt_finishes_exactly() {
        let mut scheduler = EaseScheduler::new();
        scheduler.ease_by(EaseChannel::PivotYaw, 20.0, 0.1);
        let mut value = 0.0;
        run(&mut scheduler, 1.0, &mut value);
        assert_eq!(value, 20.0);
        assert!(scheduler.is_idle());
    }
}

/// Events emitted while a workflow runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    /// One angle vector has been scored; `index` is 1-based.
    VectorEvaluated { index: usize, energy: f64 },
    TaskFinish,

    /// A note about the run, such as a vector whose energy is not finite.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::VectorEvaluated {
            index: 1,
            energy: 0.0,
        });
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|p| {
            events.lock().unwrap().push(p);
        }));

        reporter.report(Progress::TaskStart { total_steps: 2 });
        reporter.report(Progress::VectorEvaluated {
            index: 1,
            energy: -1.5,
        });
        reporter.report(Progress::Message("vector 1 overlaps".to_string()));
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::TaskStart { total_steps: 2 },
                Progress::VectorEvaluated {
                    index: 1,
                    energy: -1.5
                },
                Progress::Message("vector 1 overlaps".to_string()),
            ]
        );
    }
}

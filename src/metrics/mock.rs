//! Mock recorder for isolating services in tests.

use std::time::Duration;

use mockall::mock;

use crate::metrics::EvaluationRecorder;

mock! {
    pub Recorder {}

    impl EvaluationRecorder for Recorder {
        fn record_attempt(&self);
        fn record_duration(&self, elapsed: Duration);
    }
}

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::habits::HabitProfile;
use crate::predictor::api::{self, PredictError, PredictionReport};

pub(crate) enum JobMessage {
    PredictionFinished(PredictResult),
}

#[derive(Debug)]
pub(crate) struct PredictJob {
    pub(crate) endpoint: String,
    pub(crate) profile: HabitProfile,
}

#[derive(Debug)]
pub(crate) struct PredictResult {
    pub(crate) result: Result<PredictionReport, PredictError>,
}

/// Background job channel owned by the controller. Jobs run on plain threads
/// and report back through a single message queue drained once per frame.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    predict_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            predict_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn begin_predict(&mut self, job: PredictJob) {
        if self.predict_in_progress {
            return;
        }
        self.predict_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::predict(&job.endpoint, &job.profile);
            let _ = tx.send(JobMessage::PredictionFinished(PredictResult { result }));
        });
    }

    pub(super) fn clear_predict(&mut self) {
        self.predict_in_progress = false;
    }
}

use super::{
    repository::CalendarRepository,
    utils::{build_request, ApplyOutcome, FAILURE_RELOAD_MS, SUCCESS_RETURN_MS},
};
use crate::api::{ApiClient, ApiError, ApplyLeaveRequest};
use crate::utils::{navigation, time::sleep_ms};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ApplyLeaveViewModel {
    pub leave_type: StoredValue<Option<String>>,
    /// Last range endpoints reported by the calendar, as `YYYY-MM-DD`.
    pub start: RwSignal<Option<String>>,
    pub end: RwSignal<Option<String>>,
    pub outcome: RwSignal<Option<ApplyOutcome>>,
    pub apply_action: Action<ApplyLeaveRequest, Result<(), ApiError>>,
}

fn apply_submission_result(
    result: Option<Result<(), ApiError>>,
    outcome: RwSignal<Option<ApplyOutcome>>,
) {
    match result {
        Some(Ok(())) => {
            outcome.set(Some(ApplyOutcome::Applied));
            spawn_local(async move {
                sleep_ms(SUCCESS_RETURN_MS).await;
                navigation::go_back();
            });
        }
        Some(Err(err)) => {
            log::warn!("leave request rejected: {}", err);
            outcome.set(Some(ApplyOutcome::Rejected));
            spawn_local(async move {
                sleep_ms(FAILURE_RELOAD_MS).await;
                navigation::reload();
            });
        }
        None => {}
    }
}

impl ApplyLeaveViewModel {
    pub fn new(leave_type: Option<String>) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(CalendarRepository::new_with_client(Rc::new(api)));
        let start = create_rw_signal(None::<String>);
        let end = create_rw_signal(None::<String>);
        let outcome = create_rw_signal(None::<ApplyOutcome>);

        let apply_action = create_action(move |request: &ApplyLeaveRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move { repo.apply_leave(request).await }
        });

        create_effect(move |_| {
            apply_submission_result(apply_action.value().get(), outcome);
        });

        Self {
            leave_type: store_value(leave_type),
            start,
            end,
            outcome,
            apply_action,
        }
    }

    pub fn record_start(&self, iso: String) {
        self.start.set(Some(iso));
    }

    pub fn record_end(&self, iso: String) {
        self.end.set(Some(iso));
    }

    pub fn pending_request(&self) -> ApplyLeaveRequest {
        build_request(
            self.leave_type.get_value(),
            self.start.get_untracked(),
            self.end.get_untracked(),
        )
    }

    pub fn submit(&self) {
        if self.apply_action.pending().get_untracked() {
            return;
        }
        let request = self.pending_request();
        log::info!(
            "applying for {:?} leave from {:?} to {:?}",
            request.leave_type,
            request.start,
            request.end
        );
        self.apply_action.dispatch(request);
    }
}

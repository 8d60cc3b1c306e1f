use super::repository::ManagerRepository;
use crate::api::{ApiClient, ApiError, Decision, PendingRequest};
use leptos::*;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionPayload {
    pub id: String,
    pub decision: Decision,
}

#[derive(Clone, Copy)]
pub struct ManagerViewModel {
    pub pending_resource: Resource<(), Result<Vec<PendingRequest>, ApiError>>,
    /// Requests already decided in this session; hidden from the list.
    pub decided: RwSignal<HashSet<String>>,
    pub decision_action: Action<DecisionPayload, Result<String, ApiError>>,
}

fn apply_decision_result(
    result: Option<Result<String, ApiError>>,
    decided: RwSignal<HashSet<String>>,
) {
    match result {
        Some(Ok(id)) => decided.update(|ids| {
            ids.insert(id);
        }),
        Some(Err(err)) => log::error!("failed to update leave request: {}", err),
        None => {}
    }
}

impl ManagerViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(ManagerRepository::new_with_client(Rc::new(api)));
        let decided = create_rw_signal(HashSet::new());

        let pending_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move {
                    let result = repo.list_pending().await;
                    if let Err(err) = &result {
                        log::error!("failed to load pending requests: {}", err);
                    }
                    result
                }
            },
        );

        let decision_action = create_action(move |payload: &DecisionPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move {
                repo.decide(&payload.id, payload.decision).await?;
                log::info!("request {} marked {:?}", payload.id, payload.decision);
                Ok(payload.id)
            }
        });

        create_effect(move |_| {
            apply_decision_result(decision_action.value().get(), decided);
        });

        Self {
            pending_resource,
            decided,
            decision_action,
        }
    }

    pub fn visible_requests(&self) -> Signal<Vec<PendingRequest>> {
        let resource = self.pending_resource;
        let decided = self.decided;
        Signal::derive(move || {
            let requests = resource.get().and_then(Result::ok).unwrap_or_default();
            decided.with(|ids| {
                requests
                    .into_iter()
                    .filter(|request| !ids.contains(&request.id))
                    .collect()
            })
        })
    }

    pub fn decide(&self, id: String, decision: Decision) {
        self.decision_action.dispatch(DecisionPayload { id, decision });
    }
}

pub fn use_manager_view_model() -> ManagerViewModel {
    match use_context::<ManagerViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ManagerViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

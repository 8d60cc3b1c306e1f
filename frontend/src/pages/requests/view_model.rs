use super::{
    repository::RequestsRepository,
    utils::{filter_records, StatusFilter},
};
use crate::api::{ApiClient, ApiError, LeaveRequestRecord};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct RequestsViewModel {
    pub filter: RwSignal<StatusFilter>,
    pub reload: RwSignal<u32>,
    pub requests_resource: Resource<u32, Result<Vec<LeaveRequestRecord>, ApiError>>,
}

impl RequestsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(RequestsRepository::new_with_client(Rc::new(api)));
        let filter = create_rw_signal(StatusFilter::All);
        let reload = create_rw_signal(0u32);

        let requests_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move {
                    let result = repo.list_my_requests().await;
                    if let Err(err) = &result {
                        log::error!("failed to load leave history: {}", err);
                    }
                    result
                }
            },
        );

        Self {
            filter,
            reload,
            requests_resource,
        }
    }

    pub fn all_records(&self) -> Signal<Vec<LeaveRequestRecord>> {
        let resource = self.requests_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .unwrap_or_default()
        })
    }

    pub fn filtered_records(&self) -> Signal<Vec<LeaveRequestRecord>> {
        let records = self.all_records();
        let filter = self.filter;
        Signal::derive(move || records.with(|records| filter_records(records, filter.get())))
    }

    pub fn retry(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_requests_view_model() -> RequestsViewModel {
    match use_context::<RequestsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = RequestsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

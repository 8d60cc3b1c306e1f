use super::repository::DashboardRepository;
use crate::api::{ApiClient, ApiError, LeaveBalance};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub reload: RwSignal<u32>,
    pub balances_resource: Resource<u32, Result<Vec<LeaveBalance>, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(DashboardRepository::new_with_client(Rc::new(api)));
        let reload = create_rw_signal(0u32);

        let balances_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move {
                    let result = repo.load_balances().await;
                    if let Err(err) = &result {
                        log::error!("failed to load leave balances: {}", err);
                    }
                    result
                }
            },
        );

        Self {
            reload,
            balances_resource,
        }
    }

    pub fn retry(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

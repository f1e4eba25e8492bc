use super::{
    controller::{
        next_event, resolve_delete, screen_phase, transition, Confirmation, ScreenCommand,
        ScreenEvent, ScreenPhase, ScreenTriggers,
    },
    repository::ProductListRepository,
};
use crate::{
    api::{ApiClient, ApiError},
    state::{
        products::{use_product_store, CreateState, ListState, ProductStore},
        session::{sign_out, use_session, SessionContext, SessionState},
    },
};
use leptos::*;
use std::rc::Rc;

/// Wiring between the screen controller, the product store and the outside
/// world. Every collaborator is passed in; nothing is looked up globally.
#[derive(Clone, Copy)]
pub struct ProductListViewModel {
    pub session: ReadSignal<SessionState>,
    set_session: WriteSignal<SessionState>,
    pub store: ProductStore,
    pub pending_delete: RwSignal<Option<String>>,
    pub cycle_phase: RwSignal<ScreenPhase>,
    repository: StoredValue<ProductListRepository>,
    navigate: Callback<String>,
}

impl ProductListViewModel {
    pub fn new(
        repository: ProductListRepository,
        store: ProductStore,
        (session, set_session): SessionContext,
        navigate: Callback<String>,
    ) -> Self {
        Self {
            session,
            set_session,
            store,
            pending_delete: create_rw_signal(None),
            cycle_phase: create_rw_signal(ScreenPhase::Init),
            repository: store_value(repository),
            navigate,
        }
    }

    /// Reads (and subscribes to) everything that re-enters the controller.
    pub fn triggers(&self) -> ScreenTriggers {
        let session = self.session.with(|state| state.user_info.clone());
        let delete = self.store.delete.get();
        let create = self.store.create.get();
        ScreenTriggers::capture(session.as_ref(), &delete, &create)
    }

    pub fn phase(&self) -> Signal<ScreenPhase> {
        let vm = *self;
        Signal::derive(move || {
            let cycle = vm.cycle_phase.get();
            vm.store.list.with(|list| screen_phase(&cycle, list))
        })
    }

    pub fn run_cycle(&self, event: ScreenEvent) -> ScreenPhase {
        let session = self.session.get_untracked();
        let create = self.store.create.get_untracked();
        let cycle = transition(event, session.user_info.as_ref(), &create);
        log::debug!("product list {:?} -> {:?}", event, cycle.phase);
        for command in &cycle.commands {
            self.execute(command);
        }
        self.cycle_phase.set(cycle.phase.clone());
        cycle.phase
    }

    fn execute(&self, command: &ScreenCommand) {
        match command {
            ScreenCommand::ResetCreate => self.store.create.update(CreateState::reset),
            ScreenCommand::FetchList => self.fetch_list(),
            ScreenCommand::RedirectToLogin | ScreenCommand::NavigateToEdit(_) => {
                if let Some(target) = command.navigation_target() {
                    log::info!("navigating to {}", target);
                    self.navigate.call(target);
                }
            }
        }
    }

    fn fetch_list(&self) {
        let vm = *self;
        let repo = self.repository.get_value();
        // Mark the slice before the task is first polled so the phase reads Loading.
        self.store.list.update(ListState::begin);
        spawn_local(async move {
            if let Err(err) = repo.load(vm.store.list).await {
                vm.handle_failure(&err);
            }
        });
    }

    /// Opens the confirmation prompt for `product_id`.
    pub fn request_delete(&self, product_id: String) {
        self.pending_delete.set(Some(product_id));
    }

    pub fn answer_delete_prompt(&self, confirmation: Confirmation) {
        let pending = self.pending_delete.get_untracked();
        self.pending_delete.set(None);
        let Some(product_id) = resolve_delete(pending, confirmation) else {
            log::debug!("product deletion cancelled");
            return;
        };
        let vm = *self;
        let repo = self.repository.get_value();
        spawn_local(async move {
            if let Err(err) = repo.delete(product_id, vm.store.delete).await {
                vm.handle_failure(&err);
            }
        });
    }

    pub fn create_product(&self) {
        let vm = *self;
        let repo = self.repository.get_value();
        spawn_local(async move {
            if let Err(err) = repo.create(vm.store.create).await {
                vm.handle_failure(&err);
            }
        });
    }

    fn handle_failure(&self, err: &ApiError) {
        if err.is_unauthorized() {
            log::info!("session rejected by the API, signing out");
            sign_out(self.set_session);
        }
    }
}

pub fn use_product_list_view_model(navigate: Callback<String>) -> ProductListViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ProductListRepository::new_with_client(Rc::new(api));
    let vm = ProductListViewModel::new(repository, use_product_store(), use_session(), navigate);

    create_effect(move |previous: Option<ScreenTriggers>| {
        let current = vm.triggers();
        if let Some(event) = next_event(previous.as_ref(), &current) {
            untrack(|| vm.run_cycle(event));
        }
        current
    });

    vm
}

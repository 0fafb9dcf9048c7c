use crate::domain::common::MenuLabels;

/// Aggregate service over the two outbound ports. The concrete type used by
/// the API lives in `application::PiattoService`; tests instantiate it with
/// mocked ports.
#[derive(Clone, Debug)]
pub struct Service<MS, LLM> {
    pub menu_store: MS,
    pub llm_client: LLM,
    pub labels: MenuLabels,
}

impl<MS, LLM> Service<MS, LLM> {
    pub fn new(menu_store: MS, llm_client: LLM, labels: MenuLabels) -> Self {
        Self {
            menu_store,
            llm_client,
            labels,
        }
    }
}

/// Options used when constructing a [`BaseDocument`](crate::BaseDocument)
#[derive(Default, Debug, Clone)]
pub struct DocumentConfig {
    /// Keep a log of every mutation applied through a [`DocumentMutator`](crate::DocumentMutator)
    pub record_mutations: bool,
    /// The number of nodes to reserve space for up front
    pub initial_capacity: Option<usize>,
}

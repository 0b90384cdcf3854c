//! UI components: the transaction-network renderer, the ambient background
//! scene, and the fraud-ring table.

pub mod ambient;
pub mod network_graph;
pub mod ring_table;

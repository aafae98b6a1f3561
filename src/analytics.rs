// src/analytics.rs

// Camada de métricas derivadas usada pelos dashboards.
// Tudo aqui é função pura: recebe agregados prontos e devolve números,
// strings e paths prontos para renderizar.

pub mod chart;
pub mod format;
pub mod listing;
pub mod ratio;
pub mod stock;

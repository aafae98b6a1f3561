// src/config/settings_store.rs

use std::sync::Arc;

use tokio::sync::{watch, Mutex, MutexGuard};

use crate::models::settings::RestaurantSettings;

/// Configurações do restaurante compartilhadas pelo processo inteiro.
///
/// Contrato explícito: `init` na subida, `current` para ler, `update` para
/// trocar, `subscribe` para ser avisado das próximas mudanças.
#[derive(Clone)]
pub struct SettingsStore {
    sender: Arc<watch::Sender<RestaurantSettings>>,
    // Serializa ler-mesclar-salvar-publicar entre escritores concorrentes
    write_lock: Arc<Mutex<()>>,
}

impl SettingsStore {
    pub fn init(settings: RestaurantSettings) -> Self {
        let (sender, _) = watch::channel(settings);
        Self {
            sender: Arc::new(sender),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    // Snapshot (clone): não segura o lock do canal
    pub fn current(&self) -> RestaurantSettings {
        self.sender.borrow().clone()
    }

    pub fn update(&self, settings: RestaurantSettings) {
        // send_replace não falha mesmo sem nenhum assinante
        self.sender.send_replace(settings);
    }

    /// Segure o guard de `current()` até `update()`; leituras não esperam por ele.
    pub async fn lock_for_update(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    pub fn subscribe(&self) -> watch::Receiver<RestaurantSettings> {
        self.sender.subscribe()
    }
}

/// Loga cada mudança de configuração até o store ser descartado.
pub fn spawn_change_logger(store: &SettingsStore) -> tokio::task::JoinHandle<()> {
    let mut receiver = store.subscribe();

    tokio::spawn(async move {
        while receiver.changed().await.is_ok() {
            let settings = receiver.borrow_and_update().clone();
            tracing::info!(
                "⚙️ Configurações atualizadas: '{}' ({} {}), tema {}",
                settings.restaurant_name,
                settings.currency_code,
                settings.currency_symbol,
                settings.theme
            );
        }
    })
}

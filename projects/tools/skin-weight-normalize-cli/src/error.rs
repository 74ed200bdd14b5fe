use skin_weight_normalize::SettingsError;
use skin_weight_normalize_gltf::GltfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Gltf(#[from] GltfError),
}

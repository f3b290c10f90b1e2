mod install_public_api_contract;
mod rewrite_launcher_public_api_contract;

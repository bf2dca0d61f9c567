pub mod run_config_dto;

mod command_usage;
mod disabled_channel;
mod guild_config;

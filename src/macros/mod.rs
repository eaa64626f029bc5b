mod handle_command;

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON document per line"),
    )
}

fn transaction_cmd(name: &'static str, noun: &'static str) -> Command {
    Command::new(name)
        .about(format!("Record and browse {noun}s"))
        .subcommand_required(true)
        .subcommand(json_flags(
            Command::new("list")
                .about(format!("{noun}s grouped by month and day, newest first"))
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("Only this month, e.g. \"March 2024\""),
                ),
        ))
        .subcommand(
            Command::new("add")
                .about(format!("Add an {noun}"))
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("source")
                        .long("source")
                        .required(true)
                        .help("Source id"),
                )
                .arg(Arg::new("description").long("description").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD, defaults to today"),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Change selected fields of a record")
                .arg(Arg::new("id").long("id").required(true))
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("source").long("source"))
                .arg(Arg::new("description").long("description"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("date").long("date")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a record")
                .arg(Arg::new("id").long("id").required(true)),
        )
}

pub fn build_cli() -> Command {
    command!()
        .name("pesoclip")
        .about("Track incomes, expenses, and monthly profit/loss")
        .subcommand(Command::new("init").about("Create the local settings store"))
        .subcommand(
            Command::new("login")
                .about("Sign in and keep the session locally")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(Command::new("logout").about("Forget the stored session"))
        .subcommand(
            Command::new("register")
                .about("Create an account")
                .arg(Arg::new("username").long("username").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true))
                .arg(
                    Arg::new("confirm_password")
                        .long("confirm-password")
                        .required(true),
                ),
        )
        .subcommand(Command::new("whoami").about("Show the signed-in user"))
        .subcommand(
            Command::new("config")
                .about("Client settings")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set-api")
                        .about("Set the backend base URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("set-currency")
                        .about("Set the currency symbol used for display")
                        .arg(Arg::new("symbol").required(true)),
                )
                .subcommand(Command::new("show").about("Print the current settings")),
        )
        .subcommand(transaction_cmd("expense", "expense"))
        .subcommand(transaction_cmd("income", "income"))
        .subcommand(json_flags(
            Command::new("pnl")
                .about("Monthly profit and loss")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("Only this month, e.g. \"March 2024\""),
                )
                .arg(
                    Arg::new("detail")
                        .long("detail")
                        .action(ArgAction::SetTrue)
                        .help("Show day buckets for both sides"),
                ),
        ))
        .subcommand(
            Command::new("source")
                .about("Sources that incomes and expenses are attached to")
                .subcommand_required(true)
                .subcommand(json_flags(
                    Command::new("list").arg(
                        Arg::new("type")
                            .long("type")
                            .help("Source type id, or 'all'"),
                    ),
                ))
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("image")
                                .long("image")
                                .required(true)
                                .help("Image URL"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("Source type id"),
                        )
                        .arg(Arg::new("description").long("description").required(true)),
                ),
        )
        .subcommand(
            Command::new("source-type")
                .about("Categories of sources")
                .subcommand_required(true)
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("add").arg(Arg::new("name").long("name").required(true))),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Daily income, expenses and profit/loss for one month")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_parser(value_parser!(u32).range(1..=12)),
                ),
        ))
        .subcommand(
            Command::new("export")
                .about("Write grouped incomes or expenses to a file")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .required(true)
                        .value_parser(["expense", "income"]),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .value_parser(["csv", "json"]),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
}

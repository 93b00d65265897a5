use std::time::Duration;

use clap::{Parser, Subcommand};
use dingtalk::transport::http::{Http, DEFAULT_BASE_URL};
use dingtalk::DingTalkClient;
use humantime::format_duration;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// DingTalk contact and chat client
#[derive(Parser, Debug)]
#[command(version = env!("CARGO_APP_VERSION"), name = "dingtalk", about, long_about = None)]
struct Args {
    /// oapi service url
    #[arg(long, env, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Access token, obtained elsewhere
    #[arg(long, env, hide_env_values = true)]
    access_token: String,
    /// Request timeout
    #[arg(long, env, default_value = "10s", value_parser = humantime::parse_duration)]
    timeout: Duration,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all departments
    DepartmentList,
    /// Show department details
    DepartmentDetail {
        #[arg(long)]
        id: i64,
    },
    /// List one page of department users
    UserList {
        #[arg(long)]
        department_id: i64,
        #[arg(long, default_value = "0")]
        offset: u32,
        #[arg(long, default_value = "100")]
        size: u32,
    },
    /// List user ids of a department
    DeptMember {
        #[arg(long)]
        id: i64,
    },
    /// Create a group chat
    CreateChat {
        #[arg(long)]
        name: String,
        #[arg(long)]
        owner: String,
        /// Chat member, repeat for several
        #[arg(long = "userid", required = true)]
        userids: Vec<String>,
    },
    /// Exchange a free-login code for the user
    UserInfoByCode {
        #[arg(long)]
        code: String,
    },
    /// Find the userid of a union id
    UseridByUnionId {
        #[arg(long)]
        unionid: String,
    },
}

async fn main_int(args: Args) -> anyhow::Result<()> {
    log::info!("Starting dingtalk");
    tracing::info!(version = env!("CARGO_APP_VERSION"));
    tracing::info!(base_url = args.base_url, "cfg");
    tracing::info!(timeout = format_duration(args.timeout).to_string(), "cfg");

    let transport = Http::new(
        &args.base_url,
        args.access_token.as_str().into(),
        args.timeout,
    )?;
    let client = DingTalkClient::new(Box::new(transport));

    match args.command {
        Command::DepartmentList => print(&client.department_list().await?),
        Command::DepartmentDetail { id } => print(&client.department_detail(id).await?),
        Command::UserList {
            department_id,
            offset,
            size,
        } => print(&client.user_list(department_id, offset, size).await?),
        Command::DeptMember { id } => print(&client.dept_member(id).await?),
        Command::CreateChat {
            name,
            owner,
            userids,
        } => print(&client.create_chat(&name, &owner, &userids).await?),
        Command::UserInfoByCode { code } => print(&client.user_info_by_code(&code).await?),
        Command::UseridByUnionId { unionid } => {
            print(&client.userid_by_union_id(&unionid).await?)
        }
    }
}

fn print<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
    let args = Args::parse();
    if let Err(e) = main_int(args).await {
        log::error!("{}", e);
        return Err(e);
    }
    Ok(())
}

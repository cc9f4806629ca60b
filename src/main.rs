// ==========================================
// 产品料号配置器 - 终端入口
// ==========================================
// 职责: 薄展示层（产品选择 + 逐属性单选 + 料号显示）
// 用法:
//   part-code-builder --catalog catalog.xlsm
//   part-code-builder --catalog catalog.csv --product Widget --choose Color=Green
// ==========================================

use anyhow::{bail, Context};
use clap::Parser;
use part_code_builder::app::{AppState, RenderedView, SelectionSession};
use part_code_builder::config::BuilderConfig;
use part_code_builder::logging;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "part-code-builder", version, about = "Product Part Code Builder")]
struct Cli {
    /// 目录文件（.xlsx/.xlsm/.xls/.csv），覆盖配置
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Excel 工作表名，覆盖配置
    #[arg(long)]
    sheet: Option<String>,

    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 直接选择产品（非交互模式）
    #[arg(long)]
    product: Option<String>,

    /// 属性选择，格式 属性=标签，可重复
    #[arg(long = "choose", value_name = "ATTR=LABEL", requires = "product")]
    choices: Vec<String>,

    /// 以 JSON 输出渲染结果
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = BuilderConfig::load(cli.config.as_deref()).context("加载配置失败")?;
    if let Some(catalog) = &cli.catalog {
        config.catalog_path = catalog.clone();
    }
    if let Some(sheet) = &cli.sheet {
        config.sheet_name = sheet.clone();
    }

    logging::init(&config.log_filter);
    tracing::info!("{} v{}", part_code_builder::APP_NAME, part_code_builder::VERSION);

    let state = AppState::new(config);
    let mut session = state.new_session().context("加载产品目录失败")?;

    match &cli.product {
        Some(product) => run_once(&mut session, product, &cli.choices, cli.json),
        None => run_interactive(&mut session, cli.json),
    }
}

fn run_once(
    session: &mut SelectionSession,
    product: &str,
    choices: &[String],
    json: bool,
) -> anyhow::Result<()> {
    session.select_product(product)?;
    for assignment in choices {
        let (attribute, label) = split_assignment(assignment)?;
        session.choose_label(attribute, label)?;
    }

    print_view(&session.render()?, json)
}

fn run_interactive(session: &mut SelectionSession, json: bool) -> anyhow::Result<()> {
    // 与下拉框默认行为一致：默认选中第一个产品
    let first = session
        .products()
        .first()
        .map(|p| p.to_string())
        .context("目录中没有产品")?;
    session.select_product(&first)?;

    print_help();
    print_view(&session.render()?, json)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        let result: anyhow::Result<()> = match input {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "products" => {
                for product in session.products() {
                    println!("  {}", product);
                }
                continue;
            }
            "show" => Ok(()),
            _ => match input.strip_prefix("product ") {
                Some(product) => session.select_product(product.trim()).map_err(Into::into),
                None => split_assignment(input).and_then(|(attribute, label)| {
                    session.choose_label(attribute, label).map_err(Into::into)
                }),
            },
        };

        if let Err(e) = result {
            eprintln!("错误: {}", e);
            continue;
        }

        // 每次交互整体重新渲染
        print_view(&session.render()?, json)?;
    }

    Ok(())
}

fn split_assignment(input: &str) -> anyhow::Result<(&str, &str)> {
    match input.split_once('=') {
        Some((attribute, label)) if !attribute.trim().is_empty() => {
            Ok((attribute.trim(), label.trim()))
        }
        _ => bail!("无法识别的输入: {}（格式: 属性=标签）", input),
    }
}

fn print_help() {
    println!("命令: products | product <名称> | <属性>=<标签> | show | help | quit");
}

fn print_view(view: &RenderedView, json: bool) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(view)?)?;
        return Ok(());
    }

    writeln!(out, "SKU Options for {} ({})", view.product, view.model_label)?;
    for control in &view.controls {
        let options: Vec<String> = control
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                if Some(i) == control.selected_index {
                    format!("[{}]", label)
                } else {
                    label.clone()
                }
            })
            .collect();
        writeln!(out, "  {}: {}", control.attribute, options.join("  "))?;
    }
    writeln!(out, "Current Part Code: {}", view.part_code)?;
    out.flush()?;
    Ok(())
}

//! # 交互式计算器
//!
//! 菜单选择计算类型 -> 逐个字段提示输入 -> 显示结果。
//! 输入错误只显示错误信息，会话保持可用；输入流结束 (EOF) 或选择 `q` 时退出。
//!
//! ## 依赖关系
//! - 使用 `cli/shell.rs` 定义的 ShellArgs
//! - 使用 `commands/{radius,recoil,linear}` 的计算函数
//! - 使用 `console` 对齐标签和清屏

use crate::cli::linear::PlotOutputFormat;
use crate::cli::shell::ShellArgs;
use crate::commands::{linear, radius, recoil};
use crate::error::Result;
use crate::input::{FieldSpec, LinearFunctionForm, NuclearRadiusForm, RecoilEnergyForm};
use crate::models::CalculationResult;
use crate::plot;
use crate::utils::output;

use console::{pad_str, Alignment, Term};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// 标签列宽
const LABEL_WIDTH: usize = 22;

/// 交互式会话中打印的采样行数
const SHELL_TABLE_ROWS: usize = 5;

/// 菜单项
const MENU: &[(&str, &str)] = &[
    ("1", "Nuclear radius"),
    ("2", "Recoil energy"),
    ("3", "Linear function"),
    ("q", "Exit"),
];

/// 菜单选择后的流程控制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// 执行 shell 命令
pub fn execute(args: ShellArgs, precision: usize) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ShellSession::new(stdin.lock(), stdout.lock(), precision);
    session.clear = args.clear;
    session.run()
}

/// 交互式会话状态
pub struct ShellSession<R, W> {
    input: R,
    out: W,
    precision: usize,
    clear: bool,
    last_result: Option<CalculationResult>,
}

impl<R: BufRead, W: Write> ShellSession<R, W> {
    pub fn new(input: R, out: W, precision: usize) -> Self {
        Self {
            input,
            out,
            precision,
            clear: false,
            last_result: None,
        }
    }

    /// 最近一次成功的计算结果
    pub fn last_result(&self) -> Option<&CalculationResult> {
        self.last_result.as_ref()
    }

    /// 主循环
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", output::header_block("Nuclear Calculator"))?;

        loop {
            self.write_menu()?;
            let choice = match self.read_line("Select")? {
                Some(c) => c,
                None => break,
            };

            let flow = match choice.to_lowercase().as_str() {
                "1" | "radius" => self.nuclear_radius()?,
                "2" | "recoil" => self.recoil_energy()?,
                "3" | "linear" => self.linear_function()?,
                "q" | "quit" | "exit" => Flow::Quit,
                "" => Flow::Continue,
                other => {
                    writeln!(self.out, "{}", output::error_line(&format!("Unknown choice '{}'", other)))?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        for (key, name) in MENU {
            writeln!(self.out, "  {}) {}", key, name)?;
        }
        let last = self.last_result().map(|r| r.display(self.precision));
        if let Some(last) = last {
            writeln!(self.out, "  Last result: {}", last)?;
        }
        Ok(())
    }

    /// 打印标题与公式
    fn begin(&mut self, title: &str, equation: &str) -> Result<()> {
        if self.clear {
            Term::stdout().clear_screen()?;
        }
        writeln!(self.out, "{}", output::header_block(title))?;
        writeln!(self.out, "{}\n", output::equation_line(equation))?;
        Ok(())
    }

    fn nuclear_radius(&mut self) -> Result<Flow> {
        self.begin("Nuclear radius", radius::EQUATION)?;

        let mut form = NuclearRadiusForm::default();
        match self.prompt(&NuclearRadiusForm::MASS_NUMBER)? {
            Some(v) => form.mass_number = v,
            None => return Ok(Flow::Quit),
        }

        let outcome = form.validate().and_then(|input| radius::calculate(&input));
        self.report(outcome)?;
        Ok(Flow::Continue)
    }

    fn recoil_energy(&mut self) -> Result<Flow> {
        self.begin("Recoil energy", recoil::EQUATION)?;

        let mut form = RecoilEnergyForm::default();
        for (spec, slot) in [
            (RecoilEnergyForm::ENERGY, &mut form.energy),
            (RecoilEnergyForm::THETA, &mut form.theta),
            (RecoilEnergyForm::MASS, &mut form.mass),
        ] {
            match self.prompt(&spec)? {
                Some(v) => *slot = v,
                None => return Ok(Flow::Quit),
            }
        }
        writeln!(self.out, "  {}", recoil::unit_note())?;

        let outcome = form.validate().and_then(|input| recoil::calculate(&input));
        self.report(outcome)?;
        Ok(Flow::Continue)
    }

    fn linear_function(&mut self) -> Result<Flow> {
        self.begin("Linear function", linear::EQUATION)?;

        let mut form = LinearFunctionForm::default();
        for (spec, slot) in [
            (LinearFunctionForm::SLOPE, &mut form.slope),
            (LinearFunctionForm::INTERCEPT, &mut form.intercept),
            (LinearFunctionForm::X_MIN, &mut form.x_min),
            (LinearFunctionForm::X_MAX, &mut form.x_max),
        ] {
            match self.prompt(&spec)? {
                Some(v) => *slot = v,
                None => return Ok(Flow::Quit),
            }
        }
        // 采样点数留空则使用默认值
        match self.prompt(&LinearFunctionForm::SAMPLES)? {
            Some(v) if !v.is_empty() => form.samples = v,
            Some(_) => {}
            None => return Ok(Flow::Quit),
        }

        let input = match form.validate() {
            Ok(input) => input,
            Err(e) => {
                writeln!(self.out, "{}", output::error_line(&e.to_string()))?;
                return Ok(Flow::Continue);
            }
        };
        let samples = match linear::sample(&input) {
            Ok(s) => s,
            Err(e) => {
                writeln!(self.out, "{}", output::error_line(&e.to_string()))?;
                return Ok(Flow::Continue);
            }
        };

        let function = plot::function_label(input.slope, input.intercept);
        writeln!(self.out, "{}", output::info_line(&format!("Function: {}", function)))?;
        if let Some(table) = linear::sample_table(&samples, SHELL_TABLE_ROWS, self.precision) {
            writeln!(self.out, "{}", table)?;
        }

        let target = match self.read_line("Plot file (empty to skip)")? {
            Some(t) => t,
            None => return Ok(Flow::Quit),
        };
        if !target.is_empty() {
            let path = PathBuf::from(&target);
            let options = linear::RenderOptions {
                format: linear::guess_format_from_extension(&path),
                title: function.clone(),
                width: 1200,
                height: 800,
            };
            match linear::render(&samples, &function, &path, &options) {
                Ok(()) => {
                    let kind = match options.format {
                        PlotOutputFormat::Png | PlotOutputFormat::Svg => "Plot",
                        PlotOutputFormat::Csv | PlotOutputFormat::Xy => "Data",
                    };
                    writeln!(
                        self.out,
                        "{}",
                        output::success_line(&format!("{} saved to '{}'", kind, path.display()))
                    )?;
                }
                Err(e) => writeln!(self.out, "{}", output::error_line(&e.to_string()))?,
            }
        }

        self.report(Ok(CalculationResult::Samples(samples)))?;
        Ok(Flow::Continue)
    }

    /// 显示结果或错误，会话继续
    fn report(&mut self, outcome: Result<CalculationResult>) -> Result<()> {
        match outcome {
            Ok(result) => {
                writeln!(self.out, "{}", output::result_line(&result.display(self.precision)))?;
                self.last_result = Some(result);
            }
            Err(e) => {
                writeln!(self.out, "{}", output::error_line(&e.to_string()))?;
            }
        }
        Ok(())
    }

    /// 按字段描述提示输入
    fn prompt(&mut self, spec: &FieldSpec) -> Result<Option<String>> {
        let label = pad_str(spec.label, LABEL_WIDTH, Alignment::Left, None);
        let prompt = if spec.unit.is_empty() {
            label.to_string()
        } else {
            format!("{} {}", label, spec.unit)
        };
        self.read_line(&prompt)
    }

    /// 读取一行，EOF 返回 None
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "  {} > ", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

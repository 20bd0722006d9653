// src/types.rs

// 数据来源
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ConnectionMode {
    Simulation,
    Hardware,
}

// 按钮 / 工具栏触发的动作
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellAction {
    RunTest,
    Clear,
    Quit,
    // 工具栏
    Home,
    Save,
}

// 动作处理完之后窗口该做什么
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterAction {
    Continue,
    Close,
}

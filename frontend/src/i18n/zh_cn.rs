pub(super) const MESSAGES: &[(&str, &str)] = &[
    // components
    ("components.isSetup.on", "已启用"),
    ("components.isSetup.off", "已停用"),
    ("components.manage", "管理"),
    ("components.delete", "删除"),
    ("components.commonTable.operation", "操作"),
    ("components.commonTable.detail", "详情"),
    ("components.commonTable.delete", "删除"),
    ("components.commonTable.reset", "重置"),
    ("components.commonTable.query", "查询"),
    ("components.invalid_token", "登录已过期，请重新登录"),
    ("components.api_error", "请求接口错误"),
    ("components.api_error_code", "请求接口错误, 错误码: "),
    // layout
    ("layout.header.code", "代码仓库"),
    ("layout.header.help", "帮助文档"),
    ("layout.header.user", "个人中心"),
    ("layout.header.signOut", "退出登录"),
    ("layout.header.setting", "系统设置"),
    ("layout.header.version", "版本"),
    ("layout.setting.title", "页面配置"),
    ("layout.setting.theme.mode", "主题模式"),
    ("layout.setting.theme.color", "主题色"),
    ("layout.setting.theme.options.light", "明亮"),
    ("layout.setting.theme.options.dark", "暗黑"),
    ("layout.setting.theme.options.auto", "跟随系统"),
    // pages.login
    ("pages.login.loginTitle", "登录到"),
    ("pages.login.subtitle", "全自动追番工具"),
    ("pages.login.signIn", "登录"),
    ("pages.login.input.account", "请输入账号"),
    ("pages.login.input.password", "请输入登录密码"),
    ("pages.login.required.account", "账号必填"),
    ("pages.login.required.phone", "手机号必填"),
    ("pages.login.required.password", "密码必填"),
    ("pages.login.required.verification", "验证码必填"),
    ("pages.login.result.success", "登录成功"),
    ("pages.login.result.username_error", "账号错误"),
    ("pages.login.result.password_error", "密码错误"),
    ("pages.login.result.other_error", "其他错误，请提交 issue"),
    // pages.bangumi
    ("pages.bangumi.search", "搜索番剧"),
    ("pages.bangumi.season", "季度"),
    ("pages.bangumi.offset", "集数偏移"),
    ("pages.bangumi.year", "年份"),
    ("pages.bangumi.exclude", "排除关键词"),
    ("pages.bangumi.empty", "暂无追踪中的番剧"),
    // pages.rss
    ("pages.rss.field.name", "索引器名称"),
    ("pages.rss.field.category", "索引器类型"),
    ("pages.rss.field.status", "索引器状态"),
    ("pages.rss.field.url", "URL"),
    ("pages.rss.field.operation", "操作"),
    ("pages.rss.placeholder.name", "请输入索引器名称"),
    ("pages.rss.placeholder.category", "请输入索引器类型"),
    ("pages.rss.placeholder.url", "请输入索引器URL"),
    ("pages.rss.placeholder.enable", "请输入是否启用"),
    ("pages.rss.status.enable", "启用"),
    ("pages.rss.status.disable", "禁用"),
    ("pages.rss.option.create", "新增索引器"),
    ("pages.rss.option.truncate", "清空索引器"),
    ("pages.rss.option.detail", "详情"),
    ("pages.rss.option.delete", "删除"),
    ("pages.rss.option.submit", "确定"),
    ("pages.rss.option.cancel", "取消"),
    ("pages.rss.hint.create", "创建索引器"),
    ("pages.rss.hint.modify", "编辑索引器"),
    ("pages.rss.hint.delete", "确认删除当前所选索引器？"),
    ("pages.rss.hint.truncate", "确认清空所有索引器？"),
    ("pages.rss.hint.delete_success", "删除成功"),
    ("pages.rss.hint.submit_success", "提交成功"),
    // pages.setting
    ("pages.setting.title.bangumi", "番剧追踪设置"),
    ("pages.setting.title.auth", "鉴权设置"),
    ("pages.setting.title.password", "修改密码"),
    ("pages.setting.form.username", "登录账号"),
    ("pages.setting.form.password", "登录密码"),
    ("pages.setting.form.r_password", "确认密码"),
    ("pages.setting.form.bangumi_default_status", "默认状态"),
    ("pages.setting.form.auth_intranet", "局域网鉴权"),
    ("pages.setting.help.bangumi_default_status", "番剧自动添加时的默认状态"),
    ("pages.setting.help.auth_intranet", "处于局域网时是否启用鉴权"),
    ("pages.setting.placeholder.password", "请输入密码"),
    ("pages.setting.placeholder.re_password", "两次输入密码不一致"),
    ("pages.setting.status.enable", "启用"),
    ("pages.setting.status.disable", "禁用"),
    ("pages.setting.hint.save_success", "保存成功"),
    ("pages.setting.option.modify_password", "修改密码"),
    ("pages.setting.option.cancel", "取消"),
    ("pages.setting.option.save", "保存"),
    ("pages.setting.option.submit", "确定"),
    // pages.result
    ("pages.result.success", "操作成功"),
    ("pages.result.fail", "操作失败"),
    ("pages.result.network_error", "网络异常，请检查网络连接"),
    ("pages.result.forbidden", "抱歉，您无权限访问此页面"),
    ("pages.result.not_found", "抱歉，您访问的页面不存在"),
    ("pages.result.server_error", "抱歉，服务器出错啦"),
    ("pages.result.browser_incompatible", "浏览器版本过低，请升级后访问"),
    ("pages.result.maintenance", "系统维护中，请稍后再试"),
    ("pages.result.back_home", "返回首页"),
];

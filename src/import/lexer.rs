//! DOT 词法分析

use crate::error::{Error, Result};

/// 词法单元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// 标识符、数字或带引号字符串
    Id { text: String, quoted: bool },
    /// `->`
    Arrow,
    /// `--`
    Dash,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Equals,
    Colon,
}

impl TokenKind {
    /// 用于错误信息
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Id { text, quoted: true } => format!("\"{}\"", text),
            TokenKind::Id { text, .. } => text.clone(),
            TokenKind::Arrow => "->".to_string(),
            TokenKind::Dash => "--".to_string(),
            TokenKind::LBrace => "{".to_string(),
            TokenKind::RBrace => "}".to_string(),
            TokenKind::LBracket => "[".to_string(),
            TokenKind::RBracket => "]".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Equals => "=".to_string(),
            TokenKind::Colon => ":".to_string(),
        }
    }

    /// 不带引号的关键字匹配（不区分大小写）
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, TokenKind::Id { text, quoted: false } if text.eq_ignore_ascii_case(keyword))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 从 1 开始的行号
    pub line: usize,
}

/// DOT 词法分析器
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    at_line_start: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            at_line_start: true,
        }
    }

    /// 切分全部输入
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_trivia()?;

        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(None),
        };
        let line = self.line;

        let kind = match c {
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '=' => self.single(TokenKind::Equals),
            ':' => self.single(TokenKind::Colon),
            '"' => self.quoted()?,
            '-' if self.rest().starts_with("->") => self.double(TokenKind::Arrow),
            '-' if self.rest().starts_with("--") => self.double(TokenKind::Dash),
            c if c == '-' || c == '.' || c.is_ascii_digit() => self.numeral()?,
            c if c.is_alphabetic() || c == '_' => self.identifier(),
            other => {
                return Err(Error::parse(line, format!("意外的字符 '{}'", other)));
            }
        };

        Ok(Some(Token { kind, line }))
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.at_line_start = true;
        } else if !c.is_whitespace() {
            self.at_line_start = false;
        }
        Some(c)
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    fn double(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        self.bump();
        kind
    }

    /// 跳过空白和注释
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            let rest = self.rest();
            match self.peek_char() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                // 行首 # 为预处理输出行
                Some('#') if self.at_line_start => self.skip_line(),
                Some('/') if rest.starts_with("//") => self.skip_line(),
                Some('/') if rest.starts_with("/*") => {
                    let start_line = self.line;
                    self.pos += 2;
                    loop {
                        if self.rest().starts_with("*/") {
                            self.pos += 2;
                            self.at_line_start = false;
                            break;
                        }
                        if self.bump().is_none() {
                            return Err(Error::parse(start_line, "块注释未闭合"));
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn identifier(&mut self) -> TokenKind {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '_' {
                self.bump();
            } else {
                break;
            }
        }
        TokenKind::Id {
            text: self.input[start..self.pos].to_string(),
            quoted: false,
        }
    }

    /// 数字：[-]?(.[0-9]+ | [0-9]+(.[0-9]*)?)
    fn numeral(&mut self) -> Result<TokenKind> {
        let start = self.pos;
        let line = self.line;
        if self.peek_char() == Some('-') {
            self.bump();
        }

        let mut digits = 0;
        let mut seen_dot = false;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                digits += 1;
                self.bump();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.bump();
            } else {
                break;
            }
        }

        let text = &self.input[start..self.pos];
        if digits == 0 {
            return Err(Error::parse(line, format!("无效的数字 '{}'", text)));
        }
        if let Some(c) = self.peek_char() {
            if c.is_alphabetic() || c == '_' {
                return Err(Error::parse(
                    line,
                    format!("数字后紧跟标识符字符: '{}{}'", text, c),
                ));
            }
        }

        Ok(TokenKind::Id {
            text: text.to_string(),
            quoted: false,
        })
    }

    /// 双引号字符串，只处理 \" 转义和反斜杠续行
    fn quoted(&mut self) -> Result<TokenKind> {
        let start_line = self.line;
        self.bump();

        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(Error::parse(start_line, "字符串未闭合")),
                Some('"') => break,
                Some('\\') => match self.peek_char() {
                    Some('"') => {
                        self.bump();
                        text.push('"');
                    }
                    Some('\n') => {
                        self.bump();
                    }
                    _ => text.push('\\'),
                },
                Some(c) => text.push(c),
            }
        }

        Ok(TokenKind::Id { text, quoted: true })
    }
}

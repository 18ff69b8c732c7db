//! DOT 语法分析
//!
//! 支持的子集：
//! - `[strict] (graph|digraph) [ID] { stmt_list }`
//! - 顶点语句 `name [label="..."]`
//! - 边语句 `a -> b -> c [label="..."]`（无向图用 `--`）
//! - 属性默认值 `graph|node|edge [...]` 与 `key = value`，解析后忽略
//!
//! 子图、HTML 字符串及其它语句一律视为解析失败。

use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{Error, Result};
use crate::graph::{EdgeInsert, Graph};

/// 解析统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub statements: usize,
    pub vertices: usize,
    pub edges: usize,
    pub duplicate_edges: usize,
}

/// 属性列表中关心的部分
#[derive(Debug, Default)]
struct Attributes {
    label: Option<String>,
}

/// DOT 解析器
pub struct DotParser {
    tokens: Vec<Token>,
    pos: usize,
    directed: bool,
    stats: ImportStats,
}

impl DotParser {
    /// 创建解析器，directed 由调用方根据首行决定
    pub fn new(input: &str, directed: bool) -> Result<Self> {
        Ok(Self {
            tokens: Lexer::new(input).tokenize()?,
            pos: 0,
            directed,
            stats: ImportStats::default(),
        })
    }

    /// 解析整张图
    pub fn parse(mut self) -> Result<(Graph, ImportStats)> {
        let mut graph = Graph::new(self.directed);

        self.parse_header()?;
        self.expect(TokenKind::LBrace)?;

        loop {
            match self.peek_kind() {
                Some(TokenKind::RBrace) => {
                    self.advance();
                    break;
                }
                Some(TokenKind::Semicolon) => {
                    self.advance();
                }
                Some(_) => {
                    self.parse_statement(&mut graph)?;
                    self.stats.statements += 1;
                }
                None => return Err(self.error_here("缺少闭合的 '}'")),
            }
        }

        if let Some(token) = self.peek() {
            return Err(Error::parse(
                token.line,
                format!("'}}' 之后存在多余内容: {}", token.kind.describe()),
            ));
        }

        self.stats.vertices = graph.vertex_count();
        self.stats.edges = graph.edge_count();
        Ok((graph, self.stats))
    }

    // ==================== 语句 ====================

    /// [strict] (graph | digraph) [ID]
    fn parse_header(&mut self) -> Result<()> {
        if self.peek_keyword("strict") {
            self.advance();
        }

        let token = self
            .advance()
            .ok_or_else(|| Error::parse(1, "输入为空，缺少 graph/digraph 声明"))?;
        let declared_directed = if token.kind.is_keyword("digraph") {
            true
        } else if token.kind.is_keyword("graph") {
            false
        } else {
            return Err(Error::parse(
                token.line,
                format!("期望 graph 或 digraph，实际为 {}", token.kind.describe()),
            ));
        };

        if declared_directed != self.directed {
            return Err(Error::parse(
                token.line,
                "首行声明的图类型与 graph/digraph 关键字不一致",
            ));
        }

        if matches!(self.peek_kind(), Some(TokenKind::Id { .. })) {
            self.parse_id()?;
        }
        Ok(())
    }

    fn parse_statement(&mut self, graph: &mut Graph) -> Result<()> {
        if self.peek_keyword("subgraph") || self.peek_kind() == Some(&TokenKind::LBrace) {
            return Err(self.error_here("不支持子图"));
        }

        // 属性默认值语句
        if self.peek_keyword("graph") || self.peek_keyword("node") || self.peek_keyword("edge") {
            self.advance();
            if self.peek_kind() != Some(&TokenKind::LBracket) {
                return Err(self.error_here("属性语句缺少 '['"));
            }
            self.parse_attr_lists()?;
            return Ok(());
        }

        let first = self.parse_node_id()?;

        match self.peek_kind() {
            // key = value
            Some(TokenKind::Equals) => {
                self.advance();
                self.parse_id()?;
                Ok(())
            }
            Some(TokenKind::Arrow) | Some(TokenKind::Dash) => {
                let mut chain = vec![first];
                while let Some(kind) = self.peek_kind() {
                    match kind {
                        TokenKind::Arrow | TokenKind::Dash => {
                            self.check_edge_op()?;
                            self.advance();
                            chain.push(self.parse_node_id()?);
                        }
                        _ => break,
                    }
                }

                let attrs = self.parse_attr_lists()?;
                for pair in chain.windows(2) {
                    let label = attrs.label.as_deref();
                    if graph.add_edge(&pair[0], &pair[1], label) == EdgeInsert::DuplicateIgnored {
                        self.stats.duplicate_edges += 1;
                    }
                }
                Ok(())
            }
            _ => {
                let attrs = self.parse_attr_lists()?;
                graph.add_vertex(&first, attrs.label.as_deref());
                Ok(())
            }
        }
    }

    /// 边运算符必须与图类型一致
    fn check_edge_op(&self) -> Result<()> {
        match (self.peek_kind(), self.directed) {
            (Some(TokenKind::Arrow), false) => Err(self.error_here("无向图中不能使用 '->'")),
            (Some(TokenKind::Dash), true) => Err(self.error_here("有向图中不能使用 '--'")),
            _ => Ok(()),
        }
    }

    /// ID [':' ID [':' ID]]，端口部分忽略
    fn parse_node_id(&mut self) -> Result<String> {
        let name = self.parse_id()?;
        for _ in 0..2 {
            if self.peek_kind() != Some(&TokenKind::Colon) {
                break;
            }
            self.advance();
            self.parse_id()?;
        }
        Ok(name)
    }

    /// ('[' a_list? ']')*
    fn parse_attr_lists(&mut self) -> Result<Attributes> {
        let mut attrs = Attributes::default();

        while self.peek_kind() == Some(&TokenKind::LBracket) {
            self.advance();
            loop {
                match self.peek_kind() {
                    Some(TokenKind::RBracket) => {
                        self.advance();
                        break;
                    }
                    Some(TokenKind::Comma) | Some(TokenKind::Semicolon) => {
                        self.advance();
                    }
                    Some(_) => {
                        let key = self.parse_id()?;
                        self.expect(TokenKind::Equals)?;
                        let value = self.parse_id()?;
                        if key == "label" {
                            attrs.label = Some(value);
                        }
                    }
                    None => return Err(self.error_here("属性列表缺少闭合的 ']'")),
                }
            }
        }

        Ok(attrs)
    }

    /// 标识符，保留关键字必须加引号
    fn parse_id(&mut self) -> Result<String> {
        let token = match self.advance() {
            Some(token) => token,
            None => return Err(self.error_here("期望标识符，实际为输入结尾")),
        };

        match token.kind {
            TokenKind::Id { ref text, quoted } => {
                let reserved = ["strict", "graph", "digraph", "node", "edge", "subgraph"];
                if !quoted && reserved.iter().any(|kw| text.eq_ignore_ascii_case(kw)) {
                    return Err(Error::parse(
                        token.line,
                        format!("关键字 '{}' 不能作为标识符", text),
                    ));
                }
                Ok(text.clone())
            }
            ref other => Err(Error::parse(
                token.line,
                format!("期望标识符，实际为 {}", other.describe()),
            )),
        }
    }

    // ==================== 工具方法 ====================

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        self.peek_kind().map_or(false, |k| k.is_keyword(keyword))
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(())
            }
            Some(token) => Err(Error::parse(
                token.line,
                format!(
                    "期望 '{}'，实际为 {}",
                    kind.describe(),
                    token.kind.describe()
                ),
            )),
            None => Err(self.error_here(format!("期望 '{}'，实际为输入结尾", kind.describe()))),
        }
    }

    /// 当前位置的错误；到达结尾时使用最后一个词法单元的行号
    fn error_here(&self, message: impl Into<String>) -> Error {
        let line = self
            .peek()
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line);
        Error::parse(line, message)
    }
}

//! Express backend payloads
//!
//! Server, routes and controllers exist in a module-style typescript
//! variant and a declaration-style javascript variant. Both controller
//! variants implement the same in-memory CRUD contract over
//! `{id, name}` records: list, get-by-id (404 if absent), create (400 if
//! name missing, new id = max existing + 1 or 1), update (404 if absent,
//! merges name), delete (404 if absent, returns the removed record).

use crate::domain::Language;

/// Literal `.env` for generated backends
pub const ENV_FILE: &str = "PORT=3000\nNODE_ENV=development\n";

/// Literal `.gitignore` for generated backends
pub const GITIGNORE: &str = "node_modules\ndist\n.env\n";

/// Server entry file source
pub fn server_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => SERVER_TS,
        Language::Javascript => SERVER_JS,
    }
}

/// Routes file source
pub fn routes_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => ROUTES_TS,
        Language::Javascript => ROUTES_JS,
    }
}

/// Controllers file source
pub fn controllers_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => CONTROLLERS_TS,
        Language::Javascript => CONTROLLERS_JS,
    }
}

const SERVER_TS: &str = r#"import express, { Express, Request, Response } from 'express';
import cors from 'cors';
import dotenv from 'dotenv';
import routes from './routes';

// Load environment variables
dotenv.config();

const app: Express = express();
const port = process.env.PORT || 3000;

// Middleware
app.use(cors());
app.use(express.json());

// Routes
app.use('/api', routes);

app.get('/', (req: Request, res: Response) => {
  res.send('Express + TypeScript Server is running');
});

app.listen(port, () => {
  console.log(`⚡️[server]: Server is running at http://localhost:${port}`);
});
"#;

const SERVER_JS: &str = r#"const express = require('express');
const cors = require('cors');
const dotenv = require('dotenv');
const routes = require('./routes');

// Load environment variables
dotenv.config();

const app = express();
const port = process.env.PORT || 3000;

// Middleware
app.use(cors());
app.use(express.json());

// Routes
app.use('/api', routes);

app.get('/', (req, res) => {
  res.send('Express Server is running');
});

app.listen(port, () => {
  console.log(`⚡️[server]: Server is running at http://localhost:${port}`);
});
"#;

const ROUTES_TS: &str = r#"import { Router } from 'express';
import { getItems, getItemById, createItem, updateItem, deleteItem } from '../controllers';

const router = Router();

router.get('/items', getItems);
router.get('/items/:id', getItemById);
router.post('/items', createItem);
router.put('/items/:id', updateItem);
router.delete('/items/:id', deleteItem);

export default router;
"#;

const ROUTES_JS: &str = r#"const { Router } = require('express');
const { getItems, getItemById, createItem, updateItem, deleteItem } = require('../controllers');

const router = Router();

router.get('/items', getItems);
router.get('/items/:id', getItemById);
router.post('/items', createItem);
router.put('/items/:id', updateItem);
router.delete('/items/:id', deleteItem);

module.exports = router;
"#;

const CONTROLLERS_TS: &str = r#"import { Request, Response } from 'express';

// Mock data
let items: any[] = [
  { id: 1, name: 'Item 1' },
  { id: 2, name: 'Item 2' }
];

export const getItems = (req: Request, res: Response) => {
  res.json(items);
};

export const getItemById = (req: Request, res: Response) => {
  const id = parseInt(req.params.id);
  const item = items.find(item => item.id === id);

  if (!item) {
    return res.status(404).json({ message: 'Item not found' });
  }

  res.json(item);
};

export const createItem = (req: Request, res: Response) => {
  const { name } = req.body;

  if (!name) {
    return res.status(400).json({ message: 'Name is required' });
  }

  const newId = items.length > 0 ? Math.max(...items.map(item => item.id)) + 1 : 1;
  const newItem = { id: newId, name };

  items.push(newItem);
  res.status(201).json(newItem);
};

export const updateItem = (req: Request, res: Response) => {
  const id = parseInt(req.params.id);
  const { name } = req.body;

  const itemIndex = items.findIndex(item => item.id === id);

  if (itemIndex === -1) {
    return res.status(404).json({ message: 'Item not found' });
  }

  items[itemIndex] = { ...items[itemIndex], name };
  res.json(items[itemIndex]);
};

export const deleteItem = (req: Request, res: Response) => {
  const id = parseInt(req.params.id);

  const itemIndex = items.findIndex(item => item.id === id);

  if (itemIndex === -1) {
    return res.status(404).json({ message: 'Item not found' });
  }

  const deletedItem = items[itemIndex];
  items = items.filter(item => item.id !== id);

  res.json(deletedItem);
};
"#;

const CONTROLLERS_JS: &str = r#"// Mock data
let items = [
  { id: 1, name: 'Item 1' },
  { id: 2, name: 'Item 2' }
];

const getItems = (req, res) => {
  res.json(items);
};

const getItemById = (req, res) => {
  const id = parseInt(req.params.id);
  const item = items.find(item => item.id === id);

  if (!item) {
    return res.status(404).json({ message: 'Item not found' });
  }

  res.json(item);
};

const createItem = (req, res) => {
  const { name } = req.body;

  if (!name) {
    return res.status(400).json({ message: 'Name is required' });
  }

  const newId = items.length > 0 ? Math.max(...items.map(item => item.id)) + 1 : 1;
  const newItem = { id: newId, name };

  items.push(newItem);
  res.status(201).json(newItem);
};

const updateItem = (req, res) => {
  const id = parseInt(req.params.id);
  const { name } = req.body;

  const itemIndex = items.findIndex(item => item.id === id);

  if (itemIndex === -1) {
    return res.status(404).json({ message: 'Item not found' });
  }

  items[itemIndex] = { ...items[itemIndex], name };
  res.json(items[itemIndex]);
};

const deleteItem = (req, res) => {
  const id = parseInt(req.params.id);

  const itemIndex = items.findIndex(item => item.id === id);

  if (itemIndex === -1) {
    return res.status(404).json({ message: 'Item not found' });
  }

  const deletedItem = items[itemIndex];
  items = items.filter(item => item.id !== id);

  res.json(deletedItem);
};

module.exports = {
  getItems,
  getItemById,
  createItem,
  updateItem,
  deleteItem
};
"#;
